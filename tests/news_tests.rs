use mockito::{Matcher, Server};
use mood_journal::errors::NewsError;
use mood_journal::news::{search_headlines, GNewsClient, HeadlineProvider, Pagination};

fn articles_body() -> &'static str {
    r#"{
        "totalArticles": 17,
        "articles": [
            {
                "title": "Rover finds ice",
                "description": "Polar crater survey",
                "url": "https://news.example/ice",
                "image": "https://news.example/ice.jpg",
                "publishedAt": "2026-10-14T08:00:00Z",
                "source": {"name": "Space Desk", "url": "https://news.example"}
            },
            {
                "title": "Launch delayed",
                "description": "Weather at the pad",
                "url": "https://news.example/launch",
                "author": "R. Ito",
                "source": {"name": "Space Desk"}
            }
        ]
    }"#
}

#[test]
fn test_top_headlines_query_and_parse() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("category".into(), "science".into()),
            Matcher::UrlEncoded("lang".into(), "en".into()),
            Matcher::UrlEncoded("country".into(), "gb".into()),
            Matcher::UrlEncoded("max".into(), "5".into()),
            Matcher::UrlEncoded("page".into(), "3".into()),
            Matcher::UrlEncoded("apikey".into(), "news-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body())
        .create();

    let client = GNewsClient::new(server.url(), "news-key")
        .with_region("gb", "en")
        .with_page_size(5);
    let page = client.top_headlines("science", 3).unwrap();

    mock.assert();
    assert_eq!(page.total_results, 17);
    assert_eq!(page.articles.len(), 2);

    let first = &page.articles[0];
    assert_eq!(first.title, "Rover finds ice");
    assert_eq!(first.source_name, "Space Desk");
    assert_eq!(first.image.as_deref(), Some("https://news.example/ice.jpg"));
    assert_eq!(first.published_at.as_deref(), Some("2026-10-14T08:00:00Z"));
    assert_eq!(first.display_author(), "Unknown");
    assert_eq!(page.articles[1].display_author(), "R. Ito");

    let pages = Pagination::new(5).with_total(page.total_results);
    assert_eq!(pages.page_count(), 4);
}

#[test]
fn test_search_over_fetched_page() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(articles_body())
        .create();

    let client = GNewsClient::new(server.url(), "k");
    let page = client.top_headlines("general", 1).unwrap();

    let found = search_headlines(&page.articles, "LAUNCH");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].url, "https://news.example/launch");
    assert_eq!(page.articles.len(), 2);
}

#[test]
fn test_top_headlines_http_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("quota exceeded")
        .create();

    let client = GNewsClient::new(server.url(), "k");
    match client.top_headlines("general", 1) {
        Err(NewsError::Status { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[test]
fn test_top_headlines_malformed_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{\"articles\": 7}")
        .create();

    let client = GNewsClient::new(server.url(), "k");
    let result = client.top_headlines("general", 1);
    assert!(matches!(result, Err(NewsError::InvalidResponse(_))));
}
