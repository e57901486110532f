//! HTML rendering for the planner page and result cards.
//!
//! All model output and user input is escaped before interpolation. Optional
//! sub-records (Plan B, persona) produce no markup when absent.

use std::borrow::Cow;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::planner::image::image_url;
use crate::planner::options::{
    resolve_default_index, BUDGET_OPTIONS, MBTI_OPTIONS, PERIOD_OPTIONS, STATUS_OPTIONS,
};
use crate::planner::plan::{AlternatePlan, PersonaTestimonial, StudyPlan};
use crate::planner::preferences::StudyPreferences;
use crate::planner::share::PLAN_PATH;

pub const PAGE_TITLE: &str = "DreamRoute | AI留学プランナー";

pub const STYLESHEET: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=M+PLUS+Rounded+1c:wght@400;700&display=swap');
body { font-family: 'M PLUS Rounded 1c', sans-serif; background-color: #f8f9fa; color: #333333; margin: 0; }
main { max-width: 960px; margin: 0 auto; padding: 1rem 1rem 5rem; }
.hero { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 40px 20px; border-radius: 15px; color: white; text-align: center; margin-bottom: 30px; box-shadow: 0 4px 15px rgba(0,0,0,0.1); }
.hero h1 { font-size: 2.2rem; margin-bottom: 10px; font-weight: 700; }
.card { background: white; padding: 25px; border-radius: 15px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); margin-bottom: 20px; }
.card-title { color: #764ba2; font-size: 1.1rem; font-weight: bold; margin-bottom: 10px; }
.main-card { border-top: 5px solid #ff758c; }
.plan-b { border-top: 5px solid #8ec5fc; }
.columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.columns label { display: block; font-weight: bold; margin-bottom: 6px; }
.columns select, .columns input { width: 100%; padding: 8px; border-radius: 8px; border: 1px solid #ddd; box-sizing: border-box; }
.submit { width: 100%; margin-top: 20px; background: linear-gradient(90deg, #ff758c 0%, #ff7eb3 100%); border: none; color: white; font-weight: bold; padding: 15px; border-radius: 30px; font-size: 1.1rem; cursor: pointer; }
.error { background: #fdecea; color: #b3261e; padding: 16px; border-radius: 10px; margin-bottom: 20px; }
.headline { text-align: center; margin: 30px 0; color: #764ba2; }
.destination-image { width: 100%; border-radius: 10px; margin: 10px 0; }
.tag { display: inline-block; background: #eef2ff; color: #667eea; padding: 4px 12px; border-radius: 20px; font-size: 0.85rem; font-weight: bold; margin-right: 5px; }
table.costs { width: 100%; border-collapse: collapse; }
table.costs td, table.costs th { padding: 6px 8px; border-bottom: 1px solid #eee; text-align: left; }
.persona blockquote { margin: 0; padding-left: 12px; border-left: 4px solid #e0c3fc; }
.mentor { background: linear-gradient(135deg, #e0c3fc 0%, #8ec5fc 100%); padding: 30px; border-radius: 15px; text-align: center; margin-top: 30px; color: #fff; }
.mentor button { background: white; color: #764ba2; border: none; padding: 12px 30px; border-radius: 25px; font-weight: bold; cursor: pointer; }
.share input { width: 100%; padding: 8px; }
.download { display: inline-block; margin-top: 12px; color: #764ba2; font-weight: bold; }
"#;

/// Everything needed to render the page for one request.
#[derive(Debug, Default)]
pub struct PageContext<'a> {
    pub prefs: StudyPreferences,
    pub error: Option<String>,
    pub result: Option<RenderedResult<'a>>,
}

/// Result section: the cards plus the page-only share and download links.
#[derive(Debug)]
pub struct RenderedResult<'a> {
    pub plan: &'a StudyPlan,
    pub image_api_base: &'a str,
    pub share_url: Option<String>,
    pub download_href: String,
    pub download_filename: String,
}

fn esc(s: &str) -> Cow<'_, str> {
    encode_text(s)
}

fn attr(s: &str) -> Cow<'_, str> {
    encode_double_quoted_attribute(s)
}

/// Full HTML document for the planner page.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let error = ctx
        .error
        .as_deref()
        .map(|msg| format!(r#"<div class="error" role="alert">{}</div>"#, esc(msg)))
        .unwrap_or_default();

    let result = ctx
        .result
        .as_ref()
        .map(|r| {
            format!(
                "{cards}{links}",
                cards = render_result_cards(&ctx.prefs, r.plan, r.image_api_base),
                links = render_result_links(r),
            )
        })
        .unwrap_or_default();

    html_document(&format!(
        "{hero}{form}{error}{result}",
        hero = render_hero(),
        form = render_form(&ctx.prefs),
    ))
}

/// Wraps body markup in a standalone document with the inline stylesheet.
pub fn html_document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = esc(PAGE_TITLE),
        css = STYLESHEET,
    )
}

fn render_hero() -> &'static str {
    r#"<div class="hero"><h1>DreamRoute ✈️</h1><p>AIと先輩がサポートする、<br>エージェントを使わない「新しい留学」</p></div>"#
}

/// The preference form. Submits with GET so the result URL is the share link.
pub fn render_form(prefs: &StudyPreferences) -> String {
    format!(
        r#"<form class="card" method="get" action="/{path}">
<div class="card-title">🔍 あなたの希望を教えてください</div>
<div class="columns">
{status}{mbti}{period}{budget}{interest}{country}
</div>
<button class="submit" type="submit">✨ ベストなプランを生成する</button>
</form>"#,
        path = PLAN_PATH,
        status = select_field("status", "現在の立場", STATUS_OPTIONS, &prefs.status),
        mbti = select_field("mbti", "MBTIタイプ", MBTI_OPTIONS, &prefs.mbti),
        period = select_field("period", "期間", PERIOD_OPTIONS, &prefs.period),
        budget = select_field("budget", "予算", BUDGET_OPTIONS, &prefs.budget),
        interest = text_field(
            "interest",
            "興味のあること",
            &prefs.interest,
            "例：カフェ, K-POP, IT"
        ),
        country = text_field(
            "preferred_country",
            "行きたい国（決まっていれば）",
            &prefs.preferred_country,
            "例：カナダ（空欄でAI提案）"
        ),
    )
}

fn select_field(name: &str, label: &str, options: &[&str], current: &str) -> String {
    let selected = resolve_default_index(options, Some(current), 0);
    let options_html: String = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            format!(
                r#"<option value="{value}"{sel}>{text}</option>"#,
                value = attr(option),
                sel = if i == selected { " selected" } else { "" },
                text = esc(option),
            )
        })
        .collect();
    format!(
        r#"<div><label for="{name}">{label}</label><select id="{name}" name="{name}">{options_html}</select></div>"#,
        label = esc(label),
    )
}

fn text_field(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<div><label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}"></div>"#,
        label = esc(label),
        value = attr(value),
        placeholder = attr(placeholder),
    )
}

/// Result cards shared by the page and the downloadable snapshot.
pub fn render_result_cards(
    prefs: &StudyPreferences,
    plan: &StudyPlan,
    image_api_base: &str,
) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<div class="headline"><h2>{}</h2></div>"#,
        esc(&plan.catchphrase)
    ));
    html.push_str(&render_main_card(prefs, plan, image_api_base));

    if !plan.todo_list.is_empty() {
        let items: String = plan
            .todo_list
            .iter()
            .map(|t| format!("<li>{}</li>", esc(t)))
            .collect();
        html.push_str(&format!(
            r#"<div class="card"><div class="card-title">📌 {country}でのミッション</div><ul>{items}</ul></div>"#,
            country = esc(&plan.country),
        ));
    }

    html.push_str(&render_costs(plan));
    html.push_str(&format!(
        r#"<div class="card"><div class="card-title">💡 予算の裏技</div><p>{}</p></div>"#,
        esc(&plan.budget_hack)
    ));

    let steps: String = plan
        .roadmap
        .iter()
        .map(|s| format!("<li><strong>{}</strong> {}</li>", esc(&s.phase), esc(&s.action)))
        .collect();
    html.push_str(&format!(
        r#"<div class="card"><div class="card-title">🚀 渡航までのロードマップ</div><ol>{steps}</ol></div>"#
    ));

    if let Some(plan_b) = &plan.plan_b {
        html.push_str(&render_plan_b(plan_b, image_api_base));
    }
    if let Some(persona) = &plan.persona {
        html.push_str(&render_persona(persona));
    }

    html.push_str(&format!(
        r#"<div class="mentor"><h3>{}</h3><button type="button">📅 先輩と話してみる (初回無料)</button></div>"#,
        esc(&plan.mentor_promo)
    ));
    html
}

fn render_image(image_api_base: &str, country: &str, keyword: &str) -> String {
    image_url(image_api_base, country, keyword)
        .map(|src| {
            format!(
                r#"<img class="destination-image" src="{src}" alt="{alt}" loading="lazy">"#,
                src = attr(&src),
                alt = attr(country),
            )
        })
        .unwrap_or_default()
}

fn render_main_card(prefs: &StudyPreferences, plan: &StudyPlan, image_api_base: &str) -> String {
    format!(
        r#"<div class="card main-card"><h2>{emoji} {country}</h2>{image}<p><strong>{title}</strong></p><p>{desc}</p><div><span class="tag">#{status}プラン</span><span class="tag">#MBTIマッチ度高</span><span class="tag">#{interest}</span></div></div>"#,
        emoji = esc(&plan.country_emoji),
        country = esc(&plan.country),
        image = render_image(image_api_base, &plan.country, &plan.image_keyword),
        title = esc(&plan.reason_title),
        desc = esc(&plan.reason_desc),
        status = esc(&prefs.status),
        interest = esc(&prefs.interest),
    )
}

fn render_costs(plan: &StudyPlan) -> String {
    let rows: String = plan
        .cost_breakdown
        .iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                esc(&c.item),
                esc(&c.amount),
                esc(&c.detail)
            )
        })
        .collect();
    format!(
        r#"<div class="card"><div class="card-title">💰 費用の内訳</div><table class="costs"><tr><th>項目</th><th>金額</th><th>詳細</th></tr>{rows}</table></div>"#
    )
}

fn render_plan_b(plan_b: &AlternatePlan, image_api_base: &str) -> String {
    format!(
        r#"<div class="card plan-b"><div class="card-title">🅱️ プランB</div><h3>{emoji} {country}</h3>{image}<p>{reason}</p></div>"#,
        emoji = esc(&plan_b.country_emoji),
        country = esc(&plan_b.country),
        image = render_image(image_api_base, &plan_b.country, &plan_b.image_keyword),
        reason = esc(&plan_b.reason),
    )
}

fn render_persona(persona: &PersonaTestimonial) -> String {
    format!(
        r#"<div class="card persona"><div class="card-title">🗣️ 先輩の体験談</div><p><strong>{name}</strong>（{profile}）</p><blockquote>{story}</blockquote></div>"#,
        name = esc(&persona.name),
        profile = esc(&persona.profile),
        story = esc(&persona.story),
    )
}

fn render_result_links(result: &RenderedResult<'_>) -> String {
    let share = result
        .share_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<p>このURLで同じ条件のプランを友達と共有できます。</p><input type="text" readonly value="{value}"><p><a href="{value}">{text}</a></p>"#,
                value = attr(url),
                text = esc(url),
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card share"><div class="card-title">🔗 この結果をシェア</div>{share}<a class="download" href="{href}" download="{filename}">📥 プランをHTMLで保存</a></div>"#,
        href = attr(&result.download_href),
        filename = attr(&result.download_filename),
    )
}
