use headliner_engine::{
    format_published_at, response_to_domain, to_domain, HeadlineDto, HeadlineResponseDto,
    SourceDto,
};
use pretty_assertions::assert_eq;

fn article(title: &str, url: &str) -> HeadlineDto {
    HeadlineDto {
        source: SourceDto {
            id: Some("bbc-news".to_string()),
            name: "BBC News".to_string(),
        },
        author: Some("Author".to_string()),
        title: title.to_string(),
        description: Some("Description".to_string()),
        url: url.to_string(),
        url_to_image: Some("https://example.com/image.jpg".to_string()),
        published_at: "2023-06-01T12:00:00Z".to_string(),
        content: Some("Content".to_string()),
    }
}

#[test]
fn response_preserves_length_and_order() {
    let response = HeadlineResponseDto {
        status: "ok".to_string(),
        total_results: 3,
        articles: vec![
            article("First", "https://example.com/1"),
            article("Second", "https://example.com/2"),
            article("Third", "https://example.com/3"),
        ],
    };

    let headlines = response_to_domain(response);

    assert_eq!(headlines.len(), 3);
    assert_eq!(headlines[0].url, "https://example.com/1");
    assert_eq!(headlines[1].url, "https://example.com/2");
    assert_eq!(headlines[2].url, "https://example.com/3");
}

#[test]
fn absent_optional_fields_become_empty_strings() {
    let dto = HeadlineDto {
        source: SourceDto {
            id: None,
            name: "CNN".to_string(),
        },
        author: None,
        title: "Title".to_string(),
        description: None,
        url: "https://example.com/1".to_string(),
        url_to_image: None,
        published_at: "2023-06-01T12:00:00Z".to_string(),
        content: None,
    };

    let headline = to_domain(dto);

    assert_eq!(headline.source.id, "");
    assert_eq!(headline.source.name, "CNN");
    assert_eq!(headline.author, "");
    assert_eq!(headline.description, "");
    assert_eq!(headline.url_to_image, "");
    assert_eq!(headline.content, "");
}

#[test]
fn unparseable_timestamp_passes_through_unchanged() {
    assert_eq!(format_published_at("not-a-timestamp"), "not-a-timestamp");
    assert_eq!(format_published_at(""), "");
}

#[test]
fn valid_timestamp_is_reformatted_for_display() {
    let formatted = format_published_at("2023-06-01T12:00:00Z");

    // The exact rendering depends on the local timezone; assert the shape:
    // "dd Mon, hh:mm AM/PM".
    assert_ne!(formatted, "2023-06-01T12:00:00Z");
    let (date_part, time_part) = formatted.split_once(", ").expect("comma separator");
    assert_eq!(date_part.len(), "01 Jun".len());
    assert!(date_part.starts_with(|c: char| c.is_ascii_digit()));
    assert!(time_part.ends_with("AM") || time_part.ends_with("PM"));
}

#[test]
fn mapping_keeps_the_display_timestamp_on_the_headline() {
    let headline = to_domain(article("Title", "https://example.com/1"));

    assert_eq!(
        headline.published_at,
        format_published_at("2023-06-01T12:00:00Z")
    );
}
