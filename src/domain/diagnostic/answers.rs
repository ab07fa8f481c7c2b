//! Diagnostic answer vocabulary.
//!
//! Each question has a closed option set. The category chosen at step 1
//! decides which usage and material options are offered afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Step 1: the universe the piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    IconicLeatherGoods,
    TechnicalReadyToWear,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::IconicLeatherGoods, Category::TechnicalReadyToWear];

    /// Usage options offered at step 2 for this category.
    pub fn usage_options(&self) -> &'static [Usage] {
        match self {
            Category::IconicLeatherGoods => &[Usage::Daily, Usage::Travel],
            Category::TechnicalReadyToWear => &[Usage::ColdPerformance, Usage::MidSeason],
        }
    }

    /// Material options offered at step 3 for this category.
    pub fn material_options(&self) -> &'static [Material] {
        match self {
            Category::IconicLeatherGoods => &[Material::EpiLeather, Material::MonogramCanvas],
            Category::TechnicalReadyToWear => {
                &[Material::RecycledNylon, Material::RecycledDownFill]
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::IconicLeatherGoods => "Maroquinerie Iconique",
            Category::TechnicalReadyToWear => "Prêt-à-porter Technique",
        }
    }
}

/// Step 2: how the piece will be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    Daily,
    Travel,
    ColdPerformance,
    MidSeason,
}

impl Usage {
    pub fn label(&self) -> &'static str {
        match self {
            Usage::Daily => "Quotidien",
            Usage::Travel => "Voyage",
            Usage::ColdPerformance => "Performance Froid",
            Usage::MidSeason => "Mi-saison",
        }
    }
}

/// Step 3: the material. Its label is recorded verbatim on the acquired item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    EpiLeather,
    MonogramCanvas,
    RecycledNylon,
    RecycledDownFill,
}

impl Material {
    pub fn label(&self) -> &'static str {
        match self {
            Material::EpiLeather => "Cuir Épi",
            Material::MonogramCanvas => "Toile Monogram",
            Material::RecycledNylon => "Nylon Econyl®",
            Material::RecycledDownFill => "Duvet RDS",
        }
    }
}

/// Step 4: ordinal priority between looks and footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Aesthetics,
    Balance,
    ReducedImpact,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Aesthetics, Priority::Balance, Priority::ReducedImpact];

    /// Position on the three-level scale, 1-based.
    pub fn level(&self) -> u8 {
        match self {
            Priority::Aesthetics => 1,
            Priority::Balance => 2,
            Priority::ReducedImpact => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Aesthetics => "Esthétique",
            Priority::Balance => "Équilibre",
            Priority::ReducedImpact => "Impact Réduit",
        }
    }
}

/// The four questions, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Category,
    Usage,
    Material,
    Priority,
}

impl Question {
    /// Question asked at a 1-based step, `None` outside 1..=4.
    pub fn for_step(step: u8) -> Option<Self> {
        match step {
            1 => Some(Question::Category),
            2 => Some(Question::Usage),
            3 => Some(Question::Material),
            4 => Some(Question::Priority),
            _ => None,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Question::Category => "category",
            Question::Usage => "usage",
            Question::Material => "material",
            Question::Priority => "priority",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// A single submitted answer, tagged with the question it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "question", content = "value", rename_all = "snake_case")]
pub enum DiagnosticAnswer {
    Category(Category),
    Usage(Usage),
    Material(Material),
    Priority(Priority),
}

impl DiagnosticAnswer {
    /// The question this answer belongs to.
    pub fn question(&self) -> Question {
        match self {
            DiagnosticAnswer::Category(_) => Question::Category,
            DiagnosticAnswer::Usage(_) => Question::Usage,
            DiagnosticAnswer::Material(_) => Question::Material,
            DiagnosticAnswer::Priority(_) => Question::Priority,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticAnswer::Category(c) => c.label(),
            DiagnosticAnswer::Usage(u) => u.label(),
            DiagnosticAnswer::Material(m) => m.label(),
            DiagnosticAnswer::Priority(p) => p.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leather_goods_offer_daily_and_travel() {
        assert_eq!(
            Category::IconicLeatherGoods.usage_options(),
            &[Usage::Daily, Usage::Travel]
        );
        assert_eq!(
            Category::IconicLeatherGoods.material_options(),
            &[Material::EpiLeather, Material::MonogramCanvas]
        );
    }

    #[test]
    fn ready_to_wear_offers_technical_options() {
        assert_eq!(
            Category::TechnicalReadyToWear.usage_options(),
            &[Usage::ColdPerformance, Usage::MidSeason]
        );
        assert_eq!(
            Category::TechnicalReadyToWear.material_options(),
            &[Material::RecycledNylon, Material::RecycledDownFill]
        );
    }

    #[test]
    fn priority_is_ordinal() {
        assert!(Priority::Aesthetics < Priority::Balance);
        assert!(Priority::Balance < Priority::ReducedImpact);
        assert_eq!(Priority::ReducedImpact.level(), 3);
    }

    #[test]
    fn questions_follow_step_order() {
        assert_eq!(Question::for_step(0), None);
        assert_eq!(Question::for_step(1), Some(Question::Category));
        assert_eq!(Question::for_step(4), Some(Question::Priority));
        assert_eq!(Question::for_step(5), None);
    }

    #[test]
    fn answer_serializes_with_question_tag() {
        let answer = DiagnosticAnswer::Material(Material::RecycledDownFill);
        let json = serde_json::to_value(answer).unwrap();
        assert_eq!(json["question"], "material");
        assert_eq!(json["value"], "recycled_down_fill");
    }

    #[test]
    fn answer_deserializes_from_tagged_json() {
        let answer: DiagnosticAnswer =
            serde_json::from_str(r#"{"question":"category","value":"iconic_leather_goods"}"#)
                .unwrap();
        assert_eq!(answer, DiagnosticAnswer::Category(Category::IconicLeatherGoods));
    }

    #[test]
    fn material_labels_match_house_vocabulary() {
        assert_eq!(Material::EpiLeather.label(), "Cuir Épi");
        assert_eq!(Material::RecycledNylon.label(), "Nylon Econyl®");
    }
}
