mod get;
mod list;
mod scenario;
