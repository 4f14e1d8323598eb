pub mod mensagem;
