//! Terminal rendering for the headline list and detail payloads.

use headliner_core::{HeadlinesState, Route};

pub fn help() {
    println!("type to search, :open <n> for details, :retry to refetch, :quit to exit");
}

pub fn headlines(state: &HeadlinesState) {
    println!();
    println!("== {} ==", state.title);
    if !state.search_query.is_empty() {
        println!("search: {}", state.search_query);
    }
    if state.is_loading {
        println!("loading...");
        return;
    }
    if state.is_error {
        println!("Something went wrong. Type :retry to try again.");
        return;
    }
    if state.headlines.is_empty() {
        println!("No headlines to show.");
        return;
    }
    for (index, headline) in state.headlines.iter().enumerate() {
        println!(
            "{:>3}. {} ({}, {})",
            index + 1,
            headline.title,
            headline.source.name,
            headline.published_at
        );
    }
}

pub fn details(route: &Route) {
    let Route::HeadlineDetails {
        author,
        title,
        description,
        url,
        published_at,
        content,
        ..
    } = route
    else {
        return;
    };

    println!();
    println!("--- {title} ---");
    if author.is_empty() {
        println!("{published_at}");
    } else {
        println!("by {author}, {published_at}");
    }
    if !description.is_empty() {
        println!("{description}");
    }
    if !content.is_empty() {
        println!("{content}");
    }
    println!("{url}");
}
