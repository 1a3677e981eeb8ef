//! Pure listing/agent → `Line` transformations.
//!
//! No network or state access here: screens and the detail popup hand in
//! an entity and get styled lines back. Sections for absent data (agent,
//! tags) are omitted entirely rather than rendered blank.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use homeport_core::{Agent, Listing, ListingAgent};

use crate::theme;
use crate::widgets::text_fmt::{
    AGENT_PLACEHOLDER_IMAGE, LISTING_PLACEHOLDER_IMAGE, SUMMARY_DESCRIPTION_LIMIT, fmt_date,
    fmt_price, truncate,
};

/// Photo path for a listing, substituting the placeholder when absent.
pub fn listing_photo(listing: &Listing) -> &str {
    listing
        .image_url
        .as_deref()
        .unwrap_or(LISTING_PLACEHOLDER_IMAGE)
}

/// Portrait path for a listing's agent attribution.
pub fn agent_photo(agent: &ListingAgent) -> &str {
    agent.image_url.as_deref().unwrap_or(AGENT_PLACEHOLDER_IMAGE)
}

/// Portrait path for a top-level agent entry.
pub fn agent_portrait(agent: &Agent) -> &str {
    agent.image_url.as_deref().unwrap_or(AGENT_PLACEHOLDER_IMAGE)
}

fn house_type_name(listing: &Listing) -> &str {
    listing
        .house_type
        .as_ref()
        .map_or("Unknown", |t| t.name.as_str())
}

fn tags_line(tags: &[String], style: Style) -> Line<'static> {
    let chips: Vec<Span<'static>> = tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("[{tag}]"), style),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(chips)
}

/// Summary card for list views. Description is truncated; the agent and
/// tag lines appear only when that data exists.
pub fn summary_lines(listing: &Listing) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(listing.name.clone(), theme::card_title())),
        Line::from(Span::styled(
            truncate(&listing.description, SUMMARY_DESCRIPTION_LIMIT),
            theme::muted(),
        )),
        Line::from(vec![
            Span::styled(format!("${}", fmt_price(listing.price)), theme::price_style()),
            Span::styled("  ·  ", theme::muted()),
            Span::styled(house_type_name(listing).to_owned(), theme::card_text()),
        ]),
    ];

    if let Some(agent) = &listing.agent {
        lines.push(Line::from(vec![
            Span::styled("Agent: ", theme::muted()),
            Span::styled(agent.full_name(), theme::card_text()),
        ]));
    }

    if !listing.tags.is_empty() {
        lines.push(tags_line(&listing.tags, theme::tag_style()));
    }

    lines
}

/// Full detail body for the popup. Untruncated description, photo path
/// (placeholder substituted), listed/updated dates, and the same
/// omit-when-absent rules for agent and tags.
pub fn detail_lines(listing: &Listing) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(listing.name.clone(), theme::card_title())),
        Line::from(Span::styled(
            format!("${}", fmt_price(listing.price)),
            theme::price_style(),
        )),
        Line::from(Span::styled(
            format!("Photo: {}", listing_photo(listing)),
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(listing.description.clone(), theme::card_text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Type:    ", theme::muted()),
            Span::styled(house_type_name(listing).to_owned(), theme::card_text()),
        ]),
    ];

    if let Some(agent) = &listing.agent {
        lines.push(Line::from(vec![
            Span::styled("Agent:   ", theme::muted()),
            Span::styled(agent.full_name(), theme::card_text()),
            Span::styled(format!("  ({})", agent_photo(agent)), theme::muted()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Listed:  ", theme::muted()),
        Span::styled(fmt_date(listing.created_at.as_deref()), theme::card_text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Updated: ", theme::muted()),
        Span::styled(fmt_date(listing.updated_at.as_deref()), theme::card_text()),
    ]));

    if !listing.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(tags_line(&listing.tags, theme::tag_style()));
    }

    lines
}

/// Card for the Agents screen: name plus portrait path.
pub fn agent_lines(agent: &Agent) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(agent.full_name(), theme::card_title())),
        Line::from(Span::styled(
            format!("Photo: {}", agent_portrait(agent)),
            theme::muted(),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use homeport_core::HouseType;
    use pretty_assertions::assert_eq;

    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn card_text_blob(lines: &[Line]) -> String {
        lines.iter().map(|l| line_text(l) + "\n").collect()
    }

    fn base_listing() -> Listing {
        Listing {
            id: 1,
            name: "Sunny Bungalow".into(),
            description: "Small and bright.".into(),
            price: 275_000.0,
            image_url: None,
            house_type_id: 2,
            house_type: Some(HouseType {
                id: 2,
                name: "Bungalow".into(),
            }),
            agent: None,
            tags: Vec::new(),
            created_at: Some("2024-03-05T10:00:00Z".into()),
            updated_at: None,
        }
    }

    #[test]
    fn summary_omits_agent_and_tags_when_absent() {
        let blob = card_text_blob(&summary_lines(&base_listing()));
        assert!(!blob.contains("Agent:"));
        assert!(!blob.contains('['));
        assert!(blob.contains("$275,000"));
        assert!(blob.contains("Bungalow"));
    }

    #[test]
    fn summary_includes_agent_and_tags_when_present() {
        let mut listing = base_listing();
        listing.agent = Some(ListingAgent {
            first_name: "Dana".into(),
            last_name: "Reyes".into(),
            image_url: None,
        });
        listing.tags = vec!["garden".into(), "garage".into()];

        let blob = card_text_blob(&summary_lines(&listing));
        assert!(blob.contains("Agent: Dana Reyes"));
        assert!(blob.contains("[garden]"));
        assert!(blob.contains("[garage]"));
    }

    #[test]
    fn summary_truncates_description_detail_does_not() {
        let mut listing = base_listing();
        listing.description = "d".repeat(150);

        let summary = card_text_blob(&summary_lines(&listing));
        let detail = card_text_blob(&detail_lines(&listing));

        let expected = format!("{}...", "d".repeat(100));
        assert!(summary.contains(&expected));
        assert!(!summary.contains(&"d".repeat(101)));
        assert!(detail.contains(&"d".repeat(150)));
    }

    #[test]
    fn missing_house_type_renders_unknown() {
        let mut listing = base_listing();
        listing.house_type = None;

        let blob = card_text_blob(&summary_lines(&listing));
        assert!(blob.contains("Unknown"));
    }

    #[test]
    fn missing_photo_falls_back_to_placeholder() {
        let listing = base_listing();
        assert_eq!(listing_photo(&listing), LISTING_PLACEHOLDER_IMAGE);

        let mut with_photo = base_listing();
        with_photo.image_url = Some("/images/houses/1.jpg".into());
        assert_eq!(listing_photo(&with_photo), "/images/houses/1.jpg");

        let agent = ListingAgent {
            first_name: "Dana".into(),
            last_name: "Reyes".into(),
            image_url: None,
        };
        assert_eq!(agent_photo(&agent), AGENT_PLACEHOLDER_IMAGE);

        let blob = card_text_blob(&detail_lines(&listing));
        assert!(blob.contains(LISTING_PLACEHOLDER_IMAGE));
    }

    #[test]
    fn detail_dates_render_and_fall_back() {
        let blob = card_text_blob(&detail_lines(&base_listing()));
        assert!(blob.contains("Listed:  Mar 5, 2024"));
        assert!(blob.contains("Updated: Unknown"));
    }

    #[test]
    fn agent_card_uses_placeholder_portrait() {
        let agent = Agent {
            id: 1,
            first_name: "Avery".into(),
            last_name: "Kim".into(),
            image_url: None,
        };
        let blob = card_text_blob(&agent_lines(&agent));
        assert!(blob.contains("Avery Kim"));
        assert!(blob.contains(AGENT_PLACEHOLDER_IMAGE));
    }
}
