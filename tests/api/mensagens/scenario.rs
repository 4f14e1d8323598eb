use crate::helpers::spawn_app;

#[actix_rt::test]
async fn a_mensagem_can_be_created_fetched_updated_and_removed() {
    // Arrange
    let app = spawn_app().await;

    // Register
    let response = app
        .post_mensagem(serde_json::json!({
            "usuario": "Jose",
            "conteudo": "hi"
        }))
        .await;
    assert_eq!(201, response.status().as_u16());

    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(0, created["gostei"]);

    // Fetch
    let response = app.get_mensagem(id.clone()).await;
    assert_eq!(200, response.status().as_u16());

    let stored: serde_json::Value = response.json().await.unwrap();
    assert_eq!("Jose", stored["usuario"]);
    assert_eq!("hi", stored["conteudo"]);

    // Update
    let response = app
        .put_mensagem(
            id.clone(),
            serde_json::json!({
                "id": id,
                "usuario": "Jose",
                "conteudo": "hi there"
            }),
        )
        .await;
    assert_eq!(202, response.status().as_u16());

    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!("hi there", updated["conteudo"]);
    assert_eq!("Jose", updated["usuario"]);

    // Remove
    let response = app.delete_mensagem(id.clone()).await;
    assert_eq!(200, response.status().as_u16());

    // Gone
    let response = app.get_mensagem(id).await;
    assert_eq!(400, response.status().as_u16());
}
