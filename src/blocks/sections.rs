//! Multi-item page sections: menus, grids, sliders and tabbed panels

use serde::Serialize;
use serde_json::Value;

use super::grouping::{group_by_period, PeriodGroups, TaggedItem};
use super::link::{CallToAction, LinkTarget};
use crate::content::fields::{array_field, image_field, object_field, str_field, str_field_any};
use crate::content::ImageRef;

/// Most columns a section grid uses at the large breakpoint
pub const MAX_LARGE_COLUMNS: usize = 5;

/// First usable image of an `image` field holding either a media object or
/// a list of them
fn first_image(value: &Value, key: &str) -> Option<ImageRef> {
    match value.get(key) {
        Some(Value::Array(images)) => images.first().and_then(ImageRef::from_value),
        Some(other) => ImageRef::from_value(other),
        None => None,
    }
}

fn strings_of(value: &Value, key: &str, field: &str) -> Vec<String> {
    array_field(value, key)
        .iter()
        .filter_map(|item| str_field(item, field))
        .collect()
}

/// One linked tile of the industry grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantCard {
    pub name: String,
    pub link: LinkTarget,
    pub caption: Option<String>,
    pub image: Option<ImageRef>,
}

impl ParticipantCard {
    fn from_fields(value: &Value, name: &str, link: &str, external: &str, target: &str) -> Option<Self> {
        Some(Self {
            name: str_field(value, name)?,
            link: LinkTarget::from_fields(value, link, external, target)?,
            caption: str_field(value, "caption"),
            image: image_field(value, "backgroundImage"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryParticipants {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    /// The block's own tile first, then `industryItems`
    pub cards: Vec<ParticipantCard>,
}

impl IndustryParticipants {
    pub fn from_value(value: &Value) -> Self {
        let main = ParticipantCard::from_fields(
            value,
            "industryParticipantsButtonName",
            "industryParticipantsButtonLink",
            "industryParticipantsButtonLinkExternal",
            "industryParticipantsButtonTarget",
        );
        let items = array_field(value, "industryItems")
            .iter()
            .filter_map(|item| ParticipantCard::from_fields(item, "buttonName", "buttonLink", "isExternal", "target"));

        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field(value, "subHeading"),
            cards: main.into_iter().chain(items).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientLogos {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub logos: Vec<ImageRef>,
    /// Raw `imageSlider` length, including entries without a usable image
    pub entry_count: usize,
}

impl ClientLogos {
    pub fn from_value(value: &Value) -> Self {
        let entries = array_field(value, "imageSlider");
        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field(value, "subHeading"),
            entry_count: entries.len(),
            logos: entries
                .iter()
                .filter_map(|entry| first_image(entry, "image"))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionsContentSlider {
    pub heading: Option<String>,
    pub content: Option<String>,
    pub slides: Vec<ImageRef>,
}

impl SolutionsContentSlider {
    pub fn from_value(value: &Value) -> Self {
        Self {
            heading: str_field(value, "heading"),
            content: str_field(value, "content"),
            slides: array_field(value, "clientLogos")
                .iter()
                .filter_map(|entry| first_image(entry, "image"))
                .collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.slides.is_empty() && self.heading.is_none() && self.content.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub link: LinkTarget,
}

impl MenuItem {
    fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            label: str_field(value, "menuLabel")?,
            link: LinkTarget::from_fields(value, "menuLink", "isMenuLinkExternal", "menuTarget")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StickySubMenu {
    /// The block's own item first, then `stickyMenus`
    pub items: Vec<MenuItem>,
}

impl StickySubMenu {
    pub fn from_value(value: &Value) -> Self {
        let main = MenuItem::from_value(value);
        let rest = array_field(value, "stickyMenus").iter().filter_map(MenuItem::from_value);
        Self {
            items: main.into_iter().chain(rest).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FutureOfIcon {
    pub caption: String,
    pub icon: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FutureOfColumn {
    pub title: Option<String>,
    pub icons: Vec<FutureOfIcon>,
}

impl FutureOfColumn {
    fn from_value(value: &Value) -> Self {
        Self {
            title: str_field(value, "title"),
            icons: array_field(value, "futureOfIcons")
                .iter()
                .filter_map(|item| {
                    Some(FutureOfIcon {
                        caption: str_field(item, "iconCaption")?,
                        icon: image_field(item, "icon"),
                    })
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OurSolutions {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub future_of: Option<FutureOfColumn>,
    /// One column per group
    pub solution_groups: Vec<Vec<SolutionItem>>,
}

impl OurSolutions {
    pub const SECTION_ID: &'static str = "function";

    pub fn from_value(value: &Value) -> Self {
        let future_of = object_field(value, "futureOfColum")
            .or_else(|| object_field(value, "futureOfColumn"))
            .map(FutureOfColumn::from_value);

        let solution_groups = array_field(value, "ourSolutionDescription")
            .iter()
            .map(|group| {
                array_field(group, "ourSolutionItems")
                    .iter()
                    .map(|item| SolutionItem {
                        title: str_field(item, "title"),
                        description: str_field(item, "description"),
                    })
                    .collect()
            })
            .collect();

        Self {
            heading: str_field(value, "heading"),
            description: str_field(value, "description"),
            future_of,
            solution_groups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisiveInsights {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub buttons: Vec<CallToAction>,
    pub description: Option<String>,
}

impl DecisiveInsights {
    pub const SECTION_ID: &'static str = "industry-technology-platforms";

    pub fn from_value(value: &Value) -> Self {
        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field(value, "subHeading"),
            buttons: array_field(value, "iconiblocksutton")
                .iter()
                .filter_map(CallToAction::from_button)
                .collect(),
            description: str_field(value, "description"),
        }
    }
}

/// One tab of the business-objectives block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessFunction {
    pub title: String,
    pub questions: Vec<TaggedItem>,
    pub solutions: Vec<TaggedItem>,
}

impl BusinessFunction {
    fn from_value(value: &Value, index: usize) -> Self {
        let tagged = |key: &str, field: &str| -> Vec<TaggedItem> {
            array_field(value, key)
                .iter()
                .filter_map(|item| {
                    Some(TaggedItem {
                        section: str_field(item, "sections").unwrap_or_default(),
                        text: str_field(item, field)?,
                    })
                })
                .collect()
        };

        Self {
            title: str_field(value, "title").unwrap_or_else(|| format!("Tab {}", index + 1)),
            questions: tagged("questions", "question"),
            solutions: tagged("solutions", "solution"),
        }
    }

    pub fn grouped_questions(&self) -> PeriodGroups {
        group_by_period(&self.questions)
    }

    pub fn grouped_solutions(&self) -> PeriodGroups {
        group_by_period(&self.solutions)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bo {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub caption: Option<String>,
    pub functions: Vec<BusinessFunction>,
}

impl Bo {
    pub fn from_value(value: &Value) -> Self {
        let business = object_field(value, "businessFunction");
        let functions = business
            .map(|b| {
                array_field(b, "businessFunctions")
                    .iter()
                    .enumerate()
                    .map(|(i, f)| BusinessFunction::from_value(f, i))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field(value, "subHeading"),
            caption: business.and_then(|b| str_field(b, "caption")),
            functions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SgfColumn {
    pub name: Option<String>,
    pub image: Option<ImageRef>,
    pub list: Vec<String>,
    pub link: Option<LinkTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sgf {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub columns: Vec<SgfColumn>,
    pub right_title: Option<String>,
    pub right_list: Vec<String>,
}

impl Sgf {
    pub const SECTION_ID: &'static str = "sgf";

    pub fn from_value(value: &Value) -> Self {
        let columns = array_field(value, "sgfColumn")
            .iter()
            .map(|item| SgfColumn {
                name: str_field(item, "sgfName"),
                image: image_field(item, "image"),
                list: strings_of(item, "list", "sgfListName"),
                link: LinkTarget::from_fields(item, "sgfURL", "isExternal", "sgfTarget"),
            })
            .collect();

        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field_any(value, &["suheading", "subHeading"]),
            columns,
            right_title: str_field(value, "rightSideTitle"),
            right_list: strings_of(value, "rightSideRedcolumnList", "sgfListName"),
        }
    }

    /// The red column needs both a title and at least one entry
    pub fn has_right_column(&self) -> bool {
        self.right_title.is_some() && !self.right_list.is_empty()
    }

    pub fn total_columns(&self) -> usize {
        self.columns.len() + usize::from(self.has_right_column())
    }

    pub fn large_columns(&self) -> usize {
        self.total_columns().min(MAX_LARGE_COLUMNS)
    }
}
