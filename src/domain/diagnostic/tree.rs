//! Diagnostic decision tree.
//!
//! Maps accumulated answers to the questions still to ask and, once the
//! category is known, to a recommended item template. Only the category
//! decides the recommendation: usage and priority are collected but not
//! consulted, and the material answer is only carried onto the acquired
//! item.

use serde::Serialize;

use crate::domain::collection::{ALMA_IMAGE, PILLOW_IMAGE};

use super::{Category, DiagnosticAnswer, DiagnosticAnswers, Priority, Question};

/// Fixed description of a piece that can be recommended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub reference_code: &'static str,
    pub carbon_kg: f64,
    pub default_material: &'static str,
    pub image_ref: &'static str,
}

pub const ALMA: ItemTemplate = ItemTemplate {
    key: "alma",
    name: "Alma BB",
    reference_code: "M27525",
    carbon_kg: 22.4,
    default_material: "Cuir Épi",
    image_ref: ALMA_IMAGE,
};

pub const PILLOW: ItemTemplate = ItemTemplate {
    key: "pillow",
    name: "Doudoune Pillow",
    reference_code: "1AAIJD",
    carbon_kg: 18.2,
    default_material: "Econyl®",
    image_ref: PILLOW_IMAGE,
};

/// A question together with the answers that are valid for it right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub step: u8,
    pub question: Question,
    pub options: Vec<DiagnosticAnswer>,
}

/// Pure decision logic for the diagnostic.
pub struct DiagnosticTree;

impl DiagnosticTree {
    /// Template recommended for the given answers.
    ///
    /// Returns `None` until the category has been answered.
    pub fn recommend(answers: &DiagnosticAnswers) -> Option<ItemTemplate> {
        answers.category.map(Self::template_for)
    }

    /// Template for a category.
    pub fn template_for(category: Category) -> ItemTemplate {
        match category {
            Category::IconicLeatherGoods => ALMA,
            Category::TechnicalReadyToWear => PILLOW,
        }
    }

    /// Options for a question, given the category recorded so far.
    ///
    /// Usage and material options are empty while the category is unknown.
    pub fn options(question: Question, category: Option<Category>) -> Vec<DiagnosticAnswer> {
        match question {
            Question::Category => Category::ALL
                .iter()
                .copied()
                .map(DiagnosticAnswer::Category)
                .collect(),
            Question::Usage => category
                .map(|c| {
                    c.usage_options()
                        .iter()
                        .copied()
                        .map(DiagnosticAnswer::Usage)
                        .collect()
                })
                .unwrap_or_default(),
            Question::Material => category
                .map(|c| {
                    c.material_options()
                        .iter()
                        .copied()
                        .map(DiagnosticAnswer::Material)
                        .collect()
                })
                .unwrap_or_default(),
            Question::Priority => Priority::ALL
                .iter()
                .copied()
                .map(DiagnosticAnswer::Priority)
                .collect(),
        }
    }

    /// View of the question asked at `step`, if any.
    pub fn question_at(step: u8, answers: &DiagnosticAnswers) -> Option<QuestionView> {
        let question = Question::for_step(step)?;
        Some(QuestionView {
            step,
            question,
            options: Self::options(question, answers.category),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::{Material, Usage};
    use proptest::prelude::*;

    fn answers(category: Category) -> DiagnosticAnswers {
        DiagnosticAnswers {
            category: Some(category),
            ..Default::default()
        }
    }

    #[test]
    fn leather_goods_recommend_alma() {
        let template = DiagnosticTree::recommend(&answers(Category::IconicLeatherGoods)).unwrap();
        assert_eq!(template, ALMA);
        assert_eq!(template.carbon_kg, 22.4);
    }

    #[test]
    fn ready_to_wear_recommends_pillow() {
        let template =
            DiagnosticTree::recommend(&answers(Category::TechnicalReadyToWear)).unwrap();
        assert_eq!(template, PILLOW);
        assert_eq!(template.reference_code, "1AAIJD");
    }

    #[test]
    fn no_recommendation_without_category() {
        assert_eq!(DiagnosticTree::recommend(&DiagnosticAnswers::default()), None);
    }

    #[test]
    fn usage_options_depend_on_category() {
        let options = DiagnosticTree::options(Question::Usage, Some(Category::TechnicalReadyToWear));
        assert_eq!(
            options,
            vec![
                DiagnosticAnswer::Usage(Usage::ColdPerformance),
                DiagnosticAnswer::Usage(Usage::MidSeason),
            ]
        );
        assert!(DiagnosticTree::options(Question::Material, None).is_empty());
    }

    #[test]
    fn question_at_reports_step_and_options() {
        let view = DiagnosticTree::question_at(3, &answers(Category::IconicLeatherGoods)).unwrap();
        assert_eq!(view.step, 3);
        assert_eq!(view.question, Question::Material);
        assert_eq!(view.options.len(), 2);
        assert!(DiagnosticTree::question_at(0, &DiagnosticAnswers::default()).is_none());
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::IconicLeatherGoods),
            Just(Category::TechnicalReadyToWear),
        ]
    }

    fn arb_usage() -> impl Strategy<Value = Option<Usage>> {
        prop_oneof![
            Just(None),
            Just(Some(Usage::Daily)),
            Just(Some(Usage::Travel)),
            Just(Some(Usage::ColdPerformance)),
            Just(Some(Usage::MidSeason)),
        ]
    }

    fn arb_material() -> impl Strategy<Value = Option<Material>> {
        prop_oneof![
            Just(None),
            Just(Some(Material::EpiLeather)),
            Just(Some(Material::MonogramCanvas)),
            Just(Some(Material::RecycledNylon)),
            Just(Some(Material::RecycledDownFill)),
        ]
    }

    fn arb_priority() -> impl Strategy<Value = Option<Priority>> {
        prop_oneof![
            Just(None),
            Just(Some(Priority::Aesthetics)),
            Just(Some(Priority::Balance)),
            Just(Some(Priority::ReducedImpact)),
        ]
    }

    proptest! {
        #[test]
        fn recommendation_depends_only_on_category(
            category in arb_category(),
            usage in arb_usage(),
            material in arb_material(),
            priority in arb_priority(),
        ) {
            let full = DiagnosticAnswers {
                category: Some(category),
                usage,
                material,
                priority,
            };
            prop_assert_eq!(
                DiagnosticTree::recommend(&full),
                DiagnosticTree::recommend(&answers(category))
            );
        }
    }
}
