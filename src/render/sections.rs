//! Renderers for multi-item sections

use super::{id_attr, opt_heading, opt_rich, RenderedOutput};
use crate::blocks::state::{SliderPosition, StickyState, TabSelection, AUTOPLAY_DELAY_MS};
use crate::blocks::{
    Bo, ClientLogos, DecisiveInsights, IndustryParticipants, OurSolutions, PeriodGroups, Sgf,
    SolutionsContentSlider, StickySubMenu,
};
use crate::config::SiteConfig;
use crate::helpers::{anchor_open, html_escape, image_tag, link_to};

fn sub_heading(text: Option<&str>) -> String {
    text.map(|t| format!(r#"<p class="section-sub">{}</p>"#, html_escape(t)))
        .unwrap_or_default()
}

pub(super) fn industry_participants(config: &SiteConfig, block: &IndustryParticipants) -> RenderedOutput {
    let cards: String = block
        .cards
        .iter()
        .map(|card| {
            let image = card
                .image
                .as_ref()
                .map(|image| image_tag(image, &card.name, Some("tile-bg")))
                .unwrap_or_default();
            format!(
                r#"{}<div class="tile">{}<div class="tile-overlay"></div><h3 class="tile-name">{}</h3></div></a>"#,
                anchor_open(config, &card.link, Some("tile-link"), None),
                image,
                html_escape(&card.name)
            )
        })
        .collect();

    RenderedOutput::Html(format!(
        r#"<div class="block block-industry-participants">{}{}<div class="tile-grid">{}</div></div>"#,
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        sub_heading(block.sub_heading.as_deref()),
        cards
    ))
}

pub(super) fn client_logos(block: &ClientLogos) -> RenderedOutput {
    if block.entry_count == 0 {
        return RenderedOutput::Empty;
    }

    let logos: String = block
        .logos
        .iter()
        .enumerate()
        .map(|(i, logo)| {
            format!(
                r#"<div class="logo">{}</div>"#,
                image_tag(logo, &format!("Client logo {}", i + 1), None)
            )
        })
        .collect();

    RenderedOutput::Html(format!(
        r#"<div class="block block-client-logos">{}{}<div class="logo-row">{}</div></div>"#,
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        sub_heading(block.sub_heading.as_deref()),
        logos
    ))
}

pub(super) fn solutions_content_slider(block: &SolutionsContentSlider) -> RenderedOutput {
    if block.is_blank() {
        return RenderedOutput::Empty;
    }

    let media = if block.slides.is_empty() {
        r#"<div class="slider-empty"><p>No images available for slider.</p></div>"#.to_string()
    } else {
        let position = SliderPosition::new(block.slides.len(), true);
        let slides: String = block
            .slides
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let hidden = if i == position.index() { "" } else { " hidden" };
                format!(
                    r#"<div class="slide" data-slide="{}"{}>{}</div>"#,
                    i,
                    hidden,
                    image_tag(image, &format!("Slider image {}", i + 1), None)
                )
            })
            .collect();
        let dots: String = (0..block.slides.len())
            .map(|i| {
                format!(
                    r#"<button type="button" class="slider-dot" data-go="{}" aria-label="Go to slide {}" aria-current="{}"></button>"#,
                    i,
                    i + 1,
                    i == position.index()
                )
            })
            .collect();

        format!(
            concat!(
                r#"<div class="slider" data-slider data-loop="true" data-autoplay="{delay}" data-index="{index}">"#,
                "{slides}",
                r#"<button type="button" class="slider-prev" aria-label="Previous slide">&lsaquo;</button>"#,
                r#"<button type="button" class="slider-next" aria-label="Next slide">&rsaquo;</button>"#,
                r#"<div class="slider-dots">{dots}</div>"#,
                "</div>"
            ),
            delay = AUTOPLAY_DELAY_MS,
            index = position.index(),
            slides = slides,
            dots = dots,
        )
    };

    RenderedOutput::Html(format!(
        r#"<div class="block block-solutions-slider"><div class="slider-text">{}{}</div><div class="slider-media">{}</div></div>"#,
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        opt_rich("prose", block.content.as_deref()),
        media
    ))
}

pub(super) fn sticky_sub_menu(config: &SiteConfig, block: &StickySubMenu) -> RenderedOutput {
    let items: String = block
        .items
        .iter()
        .map(|item| format!("<li>{}</li>", link_to(config, &item.link, &item.label, None)))
        .collect();

    RenderedOutput::Html(format!(
        r#"<nav class="block block-sticky-menu" data-sticky data-state="{}"><ul>{}</ul></nav>"#,
        StickyState::Unstuck.as_str(),
        items
    ))
}

pub(super) fn our_solutions(block: &OurSolutions) -> RenderedOutput {
    let future_of = block
        .future_of
        .as_ref()
        .map(|column| {
            let icons: String = column
                .icons
                .iter()
                .map(|item| {
                    let icon = item
                        .icon
                        .as_ref()
                        .map(|icon| image_tag(icon, &item.caption, Some("icon")))
                        .unwrap_or_default();
                    format!("<li>{}<span>{}</span></li>", icon, html_escape(&item.caption))
                })
                .collect();
            format!(
                r#"<div class="solutions-column future-of">{}<ul>{}</ul></div>"#,
                opt_heading("h3", "column-title", column.title.as_deref()),
                icons
            )
        })
        .unwrap_or_default();

    let groups: String = block
        .solution_groups
        .iter()
        .map(|group| {
            let items: String = group
                .iter()
                .map(|item| {
                    format!(
                        "<div>{}{}</div>",
                        opt_heading("h4", "solution-title", item.title.as_deref()),
                        opt_rich("prose", item.description.as_deref())
                    )
                })
                .collect();
            format!(r#"<div class="solutions-column">{}</div>"#, items)
        })
        .collect();

    let description = block
        .description
        .as_deref()
        .map(|d| format!(r#"<div class="section-intro prose">{}</div>"#, d))
        .unwrap_or_default();

    RenderedOutput::Html(format!(
        r#"<section{} class="block block-our-solutions">{}{}<div class="solutions-grid">{}{}</div></section>"#,
        id_attr(Some(OurSolutions::SECTION_ID)),
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        description,
        future_of,
        groups
    ))
}

pub(super) fn decisive_insights(config: &SiteConfig, block: &DecisiveInsights) -> RenderedOutput {
    let buttons = if block.buttons.is_empty() {
        String::new()
    } else {
        let links: String = block
            .buttons
            .iter()
            .map(|b| link_to(config, &b.link, &b.label, Some("btn btn-outline")))
            .collect();
        format!(r#"<div class="button-row">{}</div>"#, links)
    };

    RenderedOutput::Html(format!(
        r#"<section{} class="block block-decisive-insights">{}{}{}{}</section>"#,
        id_attr(Some(DecisiveInsights::SECTION_ID)),
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        sub_heading(block.sub_heading.as_deref()),
        buttons,
        opt_rich("prose", block.description.as_deref())
    ))
}

fn period_column(title: &str, groups: &PeriodGroups) -> String {
    let body: String = groups
        .non_empty()
        .map(|(period, items)| {
            let list: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", html_escape(item)))
                .collect();
            format!(
                r#"<div class="period"><h4>{}</h4><ul>{}</ul></div>"#,
                period.label(),
                list
            )
        })
        .collect();
    format!(r#"<div class="period-column"><h3>{}</h3>{}</div>"#, title, body)
}

pub(super) fn bo(block: &Bo) -> RenderedOutput {
    if block.functions.is_empty() {
        return RenderedOutput::Empty;
    }

    let tabs = TabSelection::new(block.functions.len());

    let buttons: String = block
        .functions
        .iter()
        .enumerate()
        .map(|(i, function)| {
            format!(
                r#"<button type="button" role="tab" class="tab" data-tab="{}" aria-selected="{}">{}</button>"#,
                i,
                tabs.is_selected(i),
                html_escape(&function.title)
            )
        })
        .collect();

    let panels: String = block
        .functions
        .iter()
        .enumerate()
        .map(|(i, function)| {
            let hidden = if tabs.is_selected(i) { "" } else { " hidden" };
            format!(
                r#"<div role="tabpanel" class="tab-panel" data-panel="{}"{}>{}{}</div>"#,
                i,
                hidden,
                period_column("Questions Addressed", &function.grouped_questions()),
                period_column("Relevant Solutions", &function.grouped_solutions())
            )
        })
        .collect();

    let caption = block
        .caption
        .as_deref()
        .map(|c| format!(r#"<p class="tab-caption">{}</p>"#, html_escape(c)))
        .unwrap_or_default();

    RenderedOutput::Html(format!(
        r#"<section class="block block-bo" data-tabs data-selected="{}">{}{}{}<div role="tablist" class="tab-list">{}</div>{}</section>"#,
        tabs.selected(),
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        sub_heading(block.sub_heading.as_deref()),
        caption,
        buttons,
        panels
    ))
}

pub(super) fn sgf(config: &SiteConfig, block: &Sgf) -> RenderedOutput {
    let columns: String = block
        .columns
        .iter()
        .map(|column| {
            let image = column
                .image
                .as_ref()
                .map(|image| image_tag(image, column.name.as_deref().unwrap_or("SGF Image"), None))
                .unwrap_or_default();
            let list = if column.list.is_empty() {
                String::new()
            } else {
                let items: String = column
                    .list
                    .iter()
                    .map(|item| format!("<li>{}</li>", html_escape(item)))
                    .collect();
                format!("<ul>{}</ul>", items)
            };
            let more = if column.link.is_some() {
                r#"<span class="more">Learn More &rarr;</span>"#
            } else {
                ""
            };
            let card = format!(
                r#"<div class="sgf-card">{}{}{}{}</div>"#,
                image,
                opt_heading("h4", "sgf-name", column.name.as_deref()),
                list,
                more
            );

            match &column.link {
                Some(link) => format!("{}{}</a>", anchor_open(config, link, Some("sgf-link"), None), card),
                None => card,
            }
        })
        .collect();

    let right = if block.has_right_column() {
        let items: String = block
            .right_list
            .iter()
            .map(|item| format!("<li>{}</li>", html_escape(item)))
            .collect();
        format!(
            r#"<div class="sgf-card sgf-highlight">{}<ul>{}</ul></div>"#,
            opt_heading("h4", "sgf-name", block.right_title.as_deref()),
            items
        )
    } else {
        String::new()
    };

    RenderedOutput::Html(format!(
        r#"<section{} class="block block-sgf">{}{}<div class="sgf-grid" style="--cols-lg: {}; --cols-xl: {}">{}{}</div></section>"#,
        id_attr(Some(Sgf::SECTION_ID)),
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        sub_heading(block.sub_heading.as_deref()),
        block.large_columns(),
        block.total_columns(),
        columns,
        right
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::Block;
    use crate::render::BlockRenderer;
    use serde_json::json;

    fn render(value: serde_json::Value) -> RenderedOutput {
        let block = Block::from_value(&value).unwrap();
        BlockRenderer::new(&SiteConfig::default()).render(&block)
    }

    fn html(value: serde_json::Value) -> String {
        match render(value) {
            RenderedOutput::Html(html) => html,
            other => panic!("expected html, got {:?}", other),
        }
    }

    #[test]
    fn test_slider_placeholder_versus_logos_nothing() {
        let slider = html(json!({
            "__typename": "ComponentBlocksSolutionsContentSlider",
            "heading": "Solutions",
            "clientLogos": [{ "image": [{ "url": null }] }]
        }));
        assert!(slider.contains("No images available for slider."));

        let logos = render(json!({
            "__typename": "ComponentBlocksClientLogos",
            "heading": "Clients",
            "imageSlider": []
        }));
        assert_eq!(logos, RenderedOutput::Empty);
    }

    #[test]
    fn test_logos_with_only_unusable_entries_keep_heading() {
        let out = html(json!({
            "__typename": "ComponentBlocksClientLogos",
            "heading": "Our clients",
            "imageSlider": [{ "image": [] }]
        }));
        assert!(out.contains("Our clients"));
        assert!(!out.contains("<img"));
    }

    #[test]
    fn test_blank_slider_is_empty() {
        assert!(render(json!({ "__typename": "ComponentBlocksSolutionsContentSlider" })).is_empty());
    }

    #[test]
    fn test_slider_initial_state() {
        let out = html(json!({
            "__typename": "ComponentBlocksSolutionsContentSlider",
            "clientLogos": [
                { "image": [{ "url": "/1.png" }] },
                { "image": [{ "url": "/2.png" }] }
            ]
        }));
        assert!(out.contains(r#"data-autoplay="5000""#));
        assert!(out.contains(r#"data-loop="true""#));
        assert!(out.contains(r#"<div class="slide" data-slide="0">"#));
        assert!(out.contains(r#"<div class="slide" data-slide="1" hidden>"#));
        assert!(out.contains(r#"alt="Slider image 2""#));
    }

    #[test]
    fn test_logos_alt_fallback() {
        let out = html(json!({
            "__typename": "ComponentBlocksClientLogos",
            "imageSlider": [{ "image": [{ "url": "/logo.svg" }] }]
        }));
        assert!(out.contains(r#"alt="Client logo 1""#));
    }

    #[test]
    fn test_sticky_menu_markup() {
        let out = html(json!({
            "__typename": "ComponentBlocksStickySubMenu",
            "menuLabel": "Overview",
            "menuLink": "#overview",
            "stickyMenus": [{
                "menuLabel": "Partner",
                "menuLink": "https://partner.example",
                "isMenuLinkExternal": true,
                "menuTarget": "_blank"
            }]
        }));
        assert!(out.contains(r#"data-state="unstuck""#));
        assert!(out.contains(r##"<a href="#overview">Overview</a>"##));
        assert!(out.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_section_ids() {
        assert!(html(json!({ "__typename": "ComponentBlocksOurSolutions" })).contains(r#"id="function""#));
        assert!(html(json!({ "__typename": "ComponentBlocksDecisiveInsights" }))
            .contains(r#"id="industry-technology-platforms""#));
        assert!(html(json!({ "__typename": "ComponentBlocksSgf" })).contains(r#"id="sgf""#));
    }

    #[test]
    fn test_participants_cards() {
        let out = html(json!({
            "__typename": "ComponentBlocksIndustryParticipants",
            "industryParticipantsButtonName": "Energy",
            "industryParticipantsButtonLink": "/energy",
            "industryItems": [{ "buttonName": "Broken" }]
        }));
        assert_eq!(out.matches("tile-link").count(), 1);
        assert!(!out.contains("Broken"));
    }

    #[test]
    fn test_bo_tabs_and_groups() {
        assert!(render(json!({ "__typename": "ComponentBlocksBo", "businessFunction": null })).is_empty());

        let out = html(json!({
            "__typename": "ComponentBlocksBo",
            "heading": "Business objectives",
            "businessFunction": {
                "businessFunctions": [
                    {
                        "title": "Sustainability",
                        "questions": [
                            { "sections": "Insights_Short_Term", "question": "Where are we?" },
                            { "sections": "Unrelated_Tag", "question": "What else?" }
                        ],
                        "solutions": []
                    },
                    { "title": "Strategy", "questions": [], "solutions": [] }
                ]
            }
        }));
        assert!(out.contains(r#"data-tab="0" aria-selected="true""#));
        assert!(out.contains(r#"data-tab="1" aria-selected="false""#));
        assert!(out.contains(r#"data-panel="1" hidden"#));
        assert!(out.contains("<h4>Short Term</h4>"));
        assert!(out.contains("<h4>Other</h4>"));
        // empty groups are not shown
        assert!(!out.contains("<h4>Medium Term</h4>"));
    }

    #[test]
    fn test_sgf_right_column_and_caps() {
        let columns: Vec<_> = (0..6)
            .map(|i| json!({ "sgfName": format!("Col {}", i), "sgfURL": "/x" }))
            .collect();
        let out = html(json!({
            "__typename": "ComponentBlocksSgf",
            "sgfColumn": columns,
            "rightSideTitle": "Outcomes",
            "rightSideRedcolumnList": [{ "sgfListName": "Growth" }]
        }));
        assert!(out.contains("--cols-lg: 5; --cols-xl: 7"));
        assert!(out.contains("sgf-highlight"));
        assert_eq!(out.matches("Learn More").count(), 6);

        let out = html(json!({ "__typename": "ComponentBlocksSgf", "rightSideTitle": "Outcomes" }));
        assert!(!out.contains("sgf-highlight"));
    }
}
