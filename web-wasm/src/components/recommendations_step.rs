//! 推薦結果ステップ
//!
//! ペイロードはコアにとって不透明。既知の形（rank/name/match_score…の
//! 候補リスト）ならカード表示し、それ以外は整形JSONをそのまま出す。

use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn RecommendationsStep<FR>(
    recommendations: Memo<Option<Value>>,
    on_reset: FR,
) -> impl IntoView
where
    FR: Fn(()) + Clone + Send + Sync + 'static,
{
    let candidates =
        Memo::new(move |_| recommendations.get().as_ref().map(parse_candidates).unwrap_or_default());
    let shortlisted = Memo::new(move |_| {
        recommendations
            .get()
            .as_ref()
            .and_then(|payload| {
                payload
                    .pointer("/summary/initial_shortlisted_candidates")
                    .and_then(Value::as_u64)
            })
    });

    view! {
        <div class="recommendations-step">
            <h1>"Recommended Employees"</h1>
            <Show when=move || shortlisted.get().is_some()>
                <p class="text-muted">
                    {move || format!("{} candidates shortlisted", shortlisted.get().unwrap_or(0))}
                </p>
            </Show>

            <Show
                when=move || !candidates.get().is_empty()
                fallback=move || view! {
                    <pre class="raw-payload">
                        {move || {
                            recommendations
                                .get()
                                .map(|payload| {
                                    serde_json::to_string_pretty(&payload)
                                        .unwrap_or_else(|_| payload.to_string())
                                })
                                .unwrap_or_default()
                        }}
                    </pre>
                }
            >
                <div class="candidate-list">
                    {move || {
                        candidates
                            .get()
                            .into_iter()
                            .map(|candidate| view! { <CandidateCard candidate=candidate /> })
                            .collect_view()
                    }}
                </div>
            </Show>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "Start Over"
            </button>
        </div>
    }
}

/// 表示用に解釈した候補者1件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub rank: u64,
    pub name: String,
    pub designation: String,
    pub match_score: Option<f64>,
    pub recommendation_level: String,
    pub key_strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub why_pick: String,
}

#[component]
fn CandidateCard(candidate: Candidate) -> impl IntoView {
    // 1回描画すれば十分。リアクティブな購読は持たない
    let Candidate {
        rank,
        name,
        designation,
        match_score,
        recommendation_level,
        key_strengths,
        concerns,
        why_pick,
    } = candidate;

    view! {
        <div class="candidate-card">
            <div class="candidate-header">
                <span class="candidate-rank">{format!("#{}", rank)}</span>
                <span class="candidate-name">{name}</span>
                <span class="candidate-designation">{designation}</span>
                {match_score.map(|score| view! {
                    <span class="match-score">{format!("{:.0}% match", score * 100.0)}</span>
                })}
            </div>
            {(!recommendation_level.is_empty())
                .then(|| view! { <p class="recommendation-level">{recommendation_level}</p> })}
            {(!key_strengths.is_empty()).then(|| view! {
                <ul class="strengths">
                    {key_strengths
                        .iter()
                        .map(|strength| view! { <li>{strength.clone()}</li> })
                        .collect_view()}
                </ul>
            })}
            {(!concerns.is_empty()).then(|| view! {
                <ul class="concerns">
                    {concerns
                        .iter()
                        .map(|concern| view! { <li>{concern.clone()}</li> })
                        .collect_view()}
                </ul>
            })}
            {(!why_pick.is_empty()).then(|| view! { <p class="why-pick">{why_pick}</p> })}
        </div>
    }
}

/// 既知のレスポンス形から候補リストを取り出す。形が違えば空
fn parse_candidates(payload: &Value) -> Vec<Candidate> {
    let Some(items) = payload.get("recommendations").and_then(Value::as_array) else {
        return Vec::new();
    };
    items.iter().filter_map(parse_candidate).collect()
}

fn parse_candidate(item: &Value) -> Option<Candidate> {
    let map = item.as_object()?;
    Some(Candidate {
        rank: map.get("rank").and_then(Value::as_u64).unwrap_or(0),
        name: get_string(map, "name"),
        designation: get_string(map, "designation"),
        match_score: map.get("match_score").and_then(Value::as_f64),
        recommendation_level: get_string(map, "recommendation_level"),
        key_strengths: get_string_list(map, "key_strengths"),
        concerns: get_string_list(map, "concerns"),
        why_pick: get_string(map, "why_pick"),
    })
}

fn get_string(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn get_string_list(map: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
