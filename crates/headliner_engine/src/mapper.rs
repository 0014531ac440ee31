use chrono::{DateTime, Local};
use headliner_core::{Headline, Source};

use crate::dto::{HeadlineDto, HeadlineResponseDto, SourceDto};

const PUBLISHED_DISPLAY_FORMAT: &str = "%d %b, %I:%M %p";

/// Maps a wire response into domain headlines, preserving article order.
pub fn response_to_domain(response: HeadlineResponseDto) -> Vec<Headline> {
    response.articles.into_iter().map(to_domain).collect()
}

/// Maps one wire article; absent optional fields become empty strings.
pub fn to_domain(dto: HeadlineDto) -> Headline {
    Headline {
        source: source_to_domain(dto.source),
        author: dto.author.unwrap_or_default(),
        title: dto.title,
        description: dto.description.unwrap_or_default(),
        url: dto.url,
        url_to_image: dto.url_to_image.unwrap_or_default(),
        published_at: format_published_at(&dto.published_at),
        content: dto.content.unwrap_or_default(),
    }
}

fn source_to_domain(dto: SourceDto) -> Source {
    Source {
        id: dto.id.unwrap_or_default(),
        name: dto.name,
    }
}

/// Reformats an ISO-8601 instant as `dd Mon, hh:mm AM/PM` in local time.
///
/// Unparseable input passes through unchanged.
pub fn format_published_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| {
            instant
                .with_timezone(&Local)
                .format(PUBLISHED_DISPLAY_FORMAT)
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}
