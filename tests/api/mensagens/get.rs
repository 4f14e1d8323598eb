use uuid::Uuid;

use crate::helpers::spawn_app;

#[actix_rt::test]
async fn get_returns_200_and_the_mensagem_for_an_existing_id() {
    // Arrange
    let app = spawn_app().await;
    let created = app.register_mensagem("Maria", "bom dia").await;

    // Act
    let response = app
        .get_mensagem(created["id"].as_str().unwrap().to_string())
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let stored: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created, stored);
}

#[actix_rt::test]
async fn get_returns_400_for_an_unknown_id() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_mensagem(Uuid::new_v4().to_string()).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!("ID Inválido", response.text().await.unwrap());
}

#[actix_rt::test]
async fn get_returns_400_for_a_malformed_id() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_mensagem("not-a-uuid".to_string()).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!("ID Inválido", response.text().await.unwrap());
}
