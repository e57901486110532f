//! The structured plan returned by the model.
//!
//! Required fields are plain `String`/`Vec`; a response that omits one fails
//! to deserialize and is reported as a malformed plan. `plan_b` and `persona`
//! are optional and rendered only when present. Defaulted fields take their
//! default both when the key is absent and when the model sends `null`.

use serde::{Deserialize, Deserializer, Serialize};

fn default_emoji() -> String {
    "✈️".to_string()
}

fn default_image_keyword() -> String {
    "city".to_string()
}

fn emoji_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_emoji))
}

fn image_keyword_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_image_keyword))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub item: String,
    pub amount: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub phase: String,
    pub action: String,
}

/// Plan B: a second destination for the same conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternatePlan {
    pub country: String,
    #[serde(default = "default_emoji", deserialize_with = "emoji_or_default")]
    pub country_emoji: String,
    pub reason: String,
    #[serde(
        default = "default_image_keyword",
        deserialize_with = "image_keyword_or_default"
    )]
    pub image_keyword: String,
}

/// A first-person story from a simulated peer with a similar profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaTestimonial {
    pub name: String,
    pub profile: String,
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub catchphrase: String,
    pub country: String,
    #[serde(default = "default_emoji", deserialize_with = "emoji_or_default")]
    pub country_emoji: String,
    /// One English word for the image service, e.g. "cafe".
    #[serde(
        default = "default_image_keyword",
        deserialize_with = "image_keyword_or_default"
    )]
    pub image_keyword: String,
    pub reason_title: String,
    pub reason_desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub todo_list: Vec<String>,
    pub cost_breakdown: Vec<CostItem>,
    pub budget_hack: String,
    pub roadmap: Vec<RoadmapStep>,
    pub mentor_promo: String,
    #[serde(default)]
    pub plan_b: Option<AlternatePlan>,
    #[serde(default)]
    pub persona: Option<PersonaTestimonial>,
}


#[cfg(test)]
mod tests {
    use super::*;

    const FULL_JSON: &str = r#"{
        "catchphrase": "トロントで未来を切り拓け",
        "country": "カナダ・トロント",
        "country_emoji": "🇨🇦",
        "image_keyword": "skyline",
        "reason_title": "多様性の街",
        "reason_desc": "ENTJのあなたに最適。",
        "todo_list": ["インターンに応募", "メープル街道ドライブ"],
        "cost_breakdown": [
            {"item": "学費", "amount": "60万円", "detail": "語学学校12週"}
        ],
        "budget_hack": "シェアハウスを使う",
        "roadmap": [
            {"phase": "半年前", "action": "ワーホリビザ申請"}
        ],
        "mentor_promo": "先輩に聞こう",
        "plan_b": {"country": "オーストラリア・シドニー", "country_emoji": "🇦🇺", "reason": "時給が高い", "image_keyword": "beach"},
        "persona": {"name": "ケン", "profile": "大学3年・ENTJ", "story": "人生が変わった"}
    }"#;

    #[test]
    fn test_full_plan_deserializes() {
        let plan: StudyPlan = serde_json::from_str(FULL_JSON).unwrap();
        assert_eq!(plan.country, "カナダ・トロント");
        assert_eq!(plan.cost_breakdown[0].amount, "60万円");
        assert_eq!(plan.roadmap[0].phase, "半年前");
        assert_eq!(plan.plan_b.unwrap().country_emoji, "🇦🇺");
        assert_eq!(plan.persona.unwrap().name, "ケン");
    }

    #[test]
    fn test_optional_sub_records_may_be_absent() {
        let mut value: serde_json::Value = serde_json::from_str(FULL_JSON).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("plan_b");
        obj.remove("persona");
        obj.remove("country_emoji");
        obj.remove("todo_list");
        let plan: StudyPlan = serde_json::from_value(value).unwrap();
        assert!(plan.plan_b.is_none());
        assert!(plan.persona.is_none());
        assert_eq!(plan.country_emoji, "✈️");
        assert!(plan.todo_list.is_empty());
    }

    #[test]
    fn test_null_plan_b_is_none() {
        let mut value: serde_json::Value = serde_json::from_str(FULL_JSON).unwrap();
        value["plan_b"] = serde_json::Value::Null;
        let plan: StudyPlan = serde_json::from_value(value).unwrap();
        assert!(plan.plan_b.is_none());
    }

    #[test]
    fn test_null_defaulted_fields_take_defaults() {
        let plan: StudyPlan = serde_json::from_str(fixtures::NULL_DEFAULTS_JSON).unwrap();
        assert_eq!(plan.country_emoji, "✈️");
        assert_eq!(plan.image_keyword, "city");
        assert!(plan.todo_list.is_empty());
        assert_eq!(plan.cost_breakdown[0].detail, "");
        let plan_b = plan.plan_b.unwrap();
        assert_eq!(plan_b.country_emoji, "✈️");
        assert_eq!(plan_b.image_keyword, "city");
        assert!(plan.persona.is_none());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let mut value: serde_json::Value = serde_json::from_str(FULL_JSON).unwrap();
        value.as_object_mut().unwrap().remove("country");
        let err = serde_json::from_value::<StudyPlan>(value).unwrap_err();
        assert!(err.to_string().contains("country"));
    }
}
