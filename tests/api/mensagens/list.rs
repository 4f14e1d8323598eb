use crate::helpers::spawn_app;

#[actix_rt::test]
async fn list_returns_an_empty_page_when_nothing_is_stored() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_mensagens(None).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let page: serde_json::Value = response.json().await.unwrap();
    assert_eq!(0, page["content"].as_array().unwrap().len());
    assert_eq!(0, page["totalElements"]);
    assert_eq!(0, page["totalPages"]);
    assert_eq!(0, page["number"]);
    assert_eq!(10, page["size"]);
}

#[actix_rt::test]
async fn list_defaults_to_page_0_and_size_10() {
    // Arrange
    let app = spawn_app().await;
    for n in 0..12 {
        app.register_mensagem("Jose", &format!("mensagem {}", n))
            .await;
    }

    // Act
    let response = app.get_mensagens(None).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let page: serde_json::Value = response.json().await.unwrap();
    assert_eq!(10, page["content"].as_array().unwrap().len());
    assert_eq!(12, page["totalElements"]);
    assert_eq!(2, page["totalPages"]);
}

#[actix_rt::test]
async fn list_respects_page_and_size_parameters() {
    // Arrange
    let app = spawn_app().await;
    for n in 0..12 {
        app.register_mensagem("Jose", &format!("mensagem {}", n))
            .await;
    }

    // Act
    let response = app.get_mensagens(Some("page=2&size=5")).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let page: serde_json::Value = response.json().await.unwrap();
    assert_eq!(2, page["content"].as_array().unwrap().len());
    assert_eq!(2, page["number"]);
    assert_eq!(5, page["size"]);
    assert_eq!(12, page["totalElements"]);
    assert_eq!(3, page["totalPages"]);
}

#[actix_rt::test]
async fn list_accepts_a_size_larger_than_the_store() {
    // Arrange
    let app = spawn_app().await;
    for n in 0..3 {
        app.register_mensagem("Jose", &format!("mensagem {}", n))
            .await;
    }

    // Act
    let response = app.get_mensagens(Some("size=500")).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let page: serde_json::Value = response.json().await.unwrap();
    assert_eq!(3, page["content"].as_array().unwrap().len());
    assert_eq!(1, page["totalPages"]);
}

#[actix_rt::test]
async fn list_returns_400_for_invalid_pagination_parameters() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("size=0", "zero size"),
        ("size=abc", "non-numeric size"),
        ("page=-1", "negative page"),
    ];

    for (query, error_message) in test_cases {
        // Act
        let response = app.get_mensagens(Some(query)).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request for {}.",
            error_message
        );
    }
}
