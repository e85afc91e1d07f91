use std::time::Duration;

use souschef::{RecipeClient, SousChefError};

fn client(server: &mockito::Server) -> RecipeClient {
    RecipeClient::new(&server.url(), Duration::from_secs(5)).unwrap()
}

#[test]
fn search_decodes_summaries() {
    let mut server = mockito::Server::new();
    let body = r#"
    {
        "count": 2,
        "recipes": [
            {
                "recipe_id": "47746",
                "title": "Best Pizza Dough Ever",
                "publisher": "101 Cookbooks",
                "image_url": "http://example.com/pizza.jpg"
            },
            {
                "recipe_id": "41470",
                "title": "Homemade Pizza",
                "publisher": "Simply Recipes",
                "image_url": "http://example.com/homemade.jpg"
            }
        ]
    }
    "#;
    let _m = server
        .mock("GET", "/search?q=pizza")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let results = client(&server).search("pizza").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "47746");
    assert_eq!(results[0].title, "Best Pizza Dough Ever");
    assert_eq!(results[1].publisher, "Simply Recipes");
}

#[test]
fn search_with_no_hits_is_an_empty_list() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/search?q=xyzzy")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 0}"#)
        .create();

    let results = client(&server).search("xyzzy").unwrap();
    assert!(results.is_empty());
}

#[test]
fn get_recipe_parses_ingredients_and_fills_defaults() {
    let mut server = mockito::Server::new();
    let body = r#"
    {
        "recipe": {
            "recipe_id": "47746",
            "title": "Best Pizza Dough Ever",
            "publisher": "101 Cookbooks",
            "image_url": "http://example.com/pizza.jpg",
            "source_url": "http://example.com/pizza",
            "ingredients": [
                "4 1/2 cups white flour (unbleached)",
                "2 tablespoons olive oil",
                "1 teaspoon fine sea salt",
                "3 onions"
            ]
        }
    }
    "#;
    let _m = server
        .mock("GET", "/get?rId=47746")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let recipe = client(&server).get_recipe("47746").unwrap();
    assert_eq!(recipe.title, "Best Pizza Dough Ever");
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.time_minutes, 30);

    assert_eq!(recipe.ingredients.len(), 4);
    assert_eq!(recipe.ingredients[0].quantity, 4.5);
    assert_eq!(recipe.ingredients[0].unit, "cup");
    assert_eq!(recipe.ingredients[0].name, "white flour");
    assert_eq!(recipe.ingredients[1].unit, "tbsp");
    assert_eq!(recipe.ingredients[3].quantity, 3.0);
    assert_eq!(recipe.ingredients[3].unit, "");
}

#[test]
fn non_success_status_is_a_typed_error() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/get?rId=missing")
        .with_status(404)
        .with_body("not found")
        .create();

    let err = client(&server).get_recipe("missing").unwrap_err();
    match err {
        SousChefError::ApiStatus(status, url) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/get"));
        }
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[test]
fn garbage_body_is_a_decode_error() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/get?rId=47746")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>definitely not json</html>")
        .create();

    let err = client(&server).get_recipe("47746").unwrap_err();
    assert!(matches!(err, SousChefError::Http(_)));
}
