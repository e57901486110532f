// All LLM prompt constants for the planner, plus the template filler.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::planner::preferences::StudyPreferences;

/// Persona the model answers as. `JSON_ONLY_SYSTEM` is appended at call time.
pub const PLANNER_ROLE: &str = "あなたはZ世代に特化した留学コンサルタントAIです。";

/// Shown in the condition list when no country was pinned.
const NO_COUNTRY_LABEL: &str = "なし（AIにお任せ）";

const AI_CHOOSES_INSTRUCTION: &str =
    "ユーザーの条件に最も適した国・都市をAIが選定して提案してください。";

/// Plan prompt template.
/// Replace: {status}, {mbti}, {budget}, {period}, {interest},
///          {preferred_country_label}, {country_instruction}
pub const PLAN_PROMPT_TEMPLATE: &str = r#"以下のユーザー属性と条件に基づき、最適な留学プランを作成してください。

【ユーザー条件】
・現在の立場: {status}
・MBTI: {mbti}
・予算: {budget}
・期間: {period}
・興味: {interest}
・国指定: {preferred_country_label}

【考慮すべきポイント】
1. 立場の考慮:
   - ユーザーは「{status}」です。この属性に合わせたプランにすること。
   - 中高生の場合：治安重視、ホームステイ、現地の高校体験や語学学校、サポート体制への言及。
   - 大学生の場合：インターン、ワーホリ、大学の単位認定、キャリア形成、現地の若者との交流。
2. 国の選定: {country_instruction}
3. 費用: 予算「{budget}」・期間「{period}」に収まる内訳にすること。
4. プランB: メインとは別の国で、同じ条件に合う代替案を1つ出すこと。
5. 先輩の体験談: 立場とMBTIが近い架空の先輩になりきり、一人称で短く語ること。

【出力形式】
以下のJSONスキーマに従って出力してください。
{
    "catchphrase": "ユーザーの心を掴む短いキャッチコピー（20文字以内）",
    "country": "提案する国と都市名",
    "country_emoji": "その国の国旗絵文字",
    "image_keyword": "その都市の雰囲気を表す英単語1語",
    "reason_title": "なぜおすすめかの一言タイトル",
    "reason_desc": "MBTIと今の立場（{status}）に基づいたおすすめ理由（150文字程度）",
    "todo_list": ["現地でやるべきこと1", "現地でやるべきこと2", "現地でやるべきこと3"],
    "cost_breakdown": [
        {"item": "費目（学費・住居・航空券など）", "amount": "金額の目安", "detail": "補足"}
    ],
    "budget_hack": "予算内で収めるための具体的な裏技アドバイス",
    "roadmap": [
        {"phase": "時期（例：半年前）", "action": "やること"}
    ],
    "mentor_promo": "先輩に相談することのメリットを一言で",
    "plan_b": {
        "country": "代替案の国と都市名",
        "country_emoji": "その国の国旗絵文字",
        "reason": "代替案をすすめる理由（80文字程度）",
        "image_keyword": "その都市の雰囲気を表す英単語1語"
    },
    "persona": {
        "name": "先輩の名前（カタカナ）",
        "profile": "先輩の属性（例：高校2年生・INFP）",
        "story": "先輩の一人称の体験談（120文字程度）"
    }
}"#;

/// Full system instruction sent with every plan request.
pub fn plan_system_prompt() -> String {
    format!("{PLANNER_ROLE} {JSON_ONLY_SYSTEM}")
}

/// Builds the plan prompt. Every user value lands in the prompt verbatim.
pub fn build_prompt(prefs: &StudyPreferences) -> String {
    let country_instruction = match prefs.preferred_country() {
        Some(country) => {
            format!("ユーザーの希望により、必ず「{country}」でのプランを作成してください。")
        }
        None => AI_CHOOSES_INSTRUCTION.to_string(),
    };

    fill_template(
        PLAN_PROMPT_TEMPLATE,
        &[
            ("status", prefs.status.as_str()),
            ("mbti", prefs.mbti.as_str()),
            ("budget", prefs.budget.as_str()),
            ("period", prefs.period.as_str()),
            ("interest", prefs.interest.as_str()),
            (
                "preferred_country_label",
                prefs.preferred_country().unwrap_or(NO_COUNTRY_LABEL),
            ),
            ("country_instruction", country_instruction.as_str()),
        ],
    )
}

/// Replaces `{key}` placeholders in a single pass.
///
/// Inserted values are never re-scanned, so a value containing `{mbti}` stays
/// literal. Braces that do not name a known key (the JSON schema) are kept.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::preferences::PreferenceQuery;

    fn prefs(status: &str, interest: &str, country: &str) -> StudyPreferences {
        StudyPreferences::from_query(&PreferenceQuery {
            status: Some(status.to_string()),
            mbti: Some("ENFP".to_string()),
            period: Some("1年".to_string()),
            budget: Some("潤沢".to_string()),
            interest: Some(interest.to_string()),
            preferred_country: Some(country.to_string()),
        })
    }

    #[test]
    fn test_prompt_contains_every_input_verbatim() {
        let p = prefs("高校生", "K-POP", "韓国");
        let prompt = build_prompt(&p);
        for value in [&p.status, &p.mbti, &p.period, &p.budget, &p.interest, &p.preferred_country] {
            assert!(prompt.contains(value.as_str()), "missing {value} in prompt");
        }
    }

    #[test]
    fn test_pinned_country_is_mandatory() {
        let prompt = build_prompt(&prefs("社会人", "IT", "カナダ"));
        assert!(prompt.contains("必ず「カナダ」でのプラン"));
        assert!(!prompt.contains(NO_COUNTRY_LABEL));
    }

    #[test]
    fn test_unpinned_country_lets_ai_choose() {
        let prompt = build_prompt(&prefs("社会人", "IT", ""));
        assert!(prompt.contains(NO_COUNTRY_LABEL));
        assert!(prompt.contains(AI_CHOOSES_INSTRUCTION));
    }

    #[test]
    fn test_no_placeholders_left_behind() {
        let prompt = build_prompt(&prefs("中学生", "サッカー", ""));
        for key in [
            "{status}",
            "{mbti}",
            "{budget}",
            "{period}",
            "{interest}",
            "{preferred_country_label}",
            "{country_instruction}",
        ] {
            assert!(!prompt.contains(key), "{key} was not filled");
        }
        assert!(prompt.contains("\"cost_breakdown\""));
    }

    #[test]
    fn test_values_with_placeholder_syntax_stay_literal() {
        let prompt = build_prompt(&prefs("高校生", "{mbti} と {budget}", ""));
        assert!(prompt.contains("・興味: {mbti} と {budget}"));
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let out = fill_template("{ \"a\": {x} } {unknown} {", &[("x", "1")]);
        assert_eq!(out, "{ \"a\": 1 } {unknown} {");
    }

    #[test]
    fn test_system_prompt_demands_json() {
        let system = plan_system_prompt();
        assert!(system.starts_with(PLANNER_ROLE));
        assert!(system.contains("valid JSON only"));
    }
}
