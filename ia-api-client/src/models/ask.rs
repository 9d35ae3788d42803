//! Ask/chat requests, the overrides bundle and the shared answer record.
//!
//! The overrides bundle has two wire projections:
//! - `/chat` sends the whole bundle ([`Overrides`] serializes as-is)
//! - `/ask` sends the retrieval/prompt subset ([`AskOverrides`])
//!
//! Unset fields are omitted from the payload; the `overrides` object itself is
//! always sent, as `{}` when the caller gave none.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error_handler::ConfigError;
use crate::models::{null_as_default, string_or_number};

/// Answer-generation strategy run by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approach {
    /// Retrieve, then read.
    #[serde(rename = "rtr")]
    RetrieveThenRead,
    /// Read, retrieve, read.
    #[serde(rename = "rrr")]
    ReadRetrieveRead,
    /// Read, decompose, ask.
    #[serde(rename = "rda")]
    ReadDecomposeAsk,
}

impl Approach {
    /// Wire code (`rtr`, `rrr`, `rda`).
    pub const fn code(self) -> &'static str {
        match self {
            Approach::RetrieveThenRead => "rtr",
            Approach::ReadRetrieveRead => "rrr",
            Approach::ReadDecomposeAsk => "rda",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Approach {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rtr" => Ok(Approach::RetrieveThenRead),
            "rrr" => Ok(Approach::ReadRetrieveRead),
            "rda" => Ok(Approach::ReadDecomposeAsk),
            _ => Err(ConfigError::InvalidFormat {
                var: "approach",
                reason: "expected one of rtr, rrr, rda",
            }),
        }
    }
}

/// Optional per-request tuning forwarded to the backend.
///
/// Field names are the wire names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_ranker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_captions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_followup_questions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_temp: Option<f64>,
    /// Comma-separated folder filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_folders: Option<String>,
    /// Comma-separated tag filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_tags: Option<String>,
}

/// `/ask` projection of [`Overrides`].
#[derive(Debug, Default, Serialize)]
pub struct AskOverrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_ranker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_captions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template_prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template_suffix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_persona: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_persona: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_persona: Option<&'a str>,
}

impl<'a> From<&'a Overrides> for AskOverrides<'a> {
    fn from(o: &'a Overrides) -> Self {
        Self {
            semantic_ranker: o.semantic_ranker,
            semantic_captions: o.semantic_captions,
            top: o.top,
            temperature: o.temperature,
            prompt_template: o.prompt_template.as_deref(),
            prompt_template_prefix: o.prompt_template_prefix.as_deref(),
            prompt_template_suffix: o.prompt_template_suffix.as_deref(),
            exclude_category: o.exclude_category.as_deref(),
            user_persona: o.user_persona.as_deref(),
            system_persona: o.system_persona.as_deref(),
            ai_persona: o.ai_persona.as_deref(),
        }
    }
}

/// Single-question request for `/ask`.
#[derive(Debug, Clone, PartialEq)]
pub struct AskRequest {
    pub question: String,
    pub approach: Approach,
    pub overrides: Option<Overrides>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, approach: Approach) -> Self {
        Self {
            question: question.into(),
            approach,
            overrides: None,
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Borrowed wire body.
    pub(crate) fn body(&self) -> AskBody<'_> {
        AskBody {
            question: &self.question,
            approach: self.approach,
            overrides: self.overrides.as_ref().map(AskOverrides::from).unwrap_or_default(),
            input_audio_path: "",
        }
    }
}

/// Wire body for `/ask`.
#[derive(Debug, Serialize)]
pub(crate) struct AskBody<'a> {
    question: &'a str,
    approach: Approach,
    overrides: AskOverrides<'a>,
    input_audio_path: &'static str,
}

/// One exchange of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
}

impl ChatTurn {
    /// A turn still waiting for its answer.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            user: text.into(),
            bot: None,
        }
    }

    /// A completed turn.
    pub fn answered(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: Some(bot.into()),
        }
    }
}

/// Conversation request for `/chat`. `history` is oldest-first; the last
/// turn normally carries the new question without a `bot` reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<ChatTurn>,
    pub approach: Approach,
    #[serde(default)]
    pub overrides: Option<Overrides>,
}

impl ChatRequest {
    pub fn new(history: Vec<ChatTurn>, approach: Approach) -> Self {
        Self {
            history,
            approach,
            overrides: None,
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub(crate) fn body(&self) -> ChatBody<'_> {
        ChatBody {
            history: &self.history,
            approach: self.approach,
            overrides: self.overrides.as_ref(),
            input_audio_path: "",
        }
    }
}

/// Wire body for `/chat`.
#[derive(Debug, Serialize)]
pub(crate) struct ChatBody<'a> {
    history: &'a [ChatTurn],
    approach: Approach,
    #[serde(serialize_with = "overrides_or_empty")]
    overrides: Option<&'a Overrides>,
    input_audio_path: &'static str,
}

fn overrides_or_empty<S>(o: &Option<&Overrides>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match o {
        Some(o) => o.serialize(s),
        None => Overrides::default().serialize(s),
    }
}

/// Source metadata for one in-text citation key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationLookupEntry {
    #[serde(default)]
    pub citation: String,
    #[serde(default)]
    pub source_path: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub page_number: String,
}

/// Answer returned by both `/ask` and `/chat`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub thoughts: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_points: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub citation_lookup: BTreeMap<String, CitationLookupEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn keys(v: &Value) -> Vec<&str> {
        let mut k: Vec<_> = v.as_object().unwrap().keys().map(String::as_str).collect();
        k.sort_unstable();
        k
    }

    #[test]
    fn only_populated_overrides_are_sent() {
        let o = Overrides {
            semantic_ranker: Some(true),
            user_persona: Some("analyst".into()),
            response_temp: Some(0.6),
            ..Default::default()
        };
        let chat = ChatRequest::new(vec![ChatTurn::user("hi")], Approach::ReadRetrieveRead)
            .with_overrides(o);
        let v = serde_json::to_value(chat.body()).unwrap();

        assert_eq!(
            keys(&v["overrides"]),
            ["response_temp", "semantic_ranker", "user_persona"]
        );
        assert_eq!(v["overrides"]["user_persona"], "analyst");
        assert_eq!(v["overrides"]["response_temp"], 0.6);
    }

    #[test]
    fn fully_populated_chat_overrides_use_wire_names() {
        let o = Overrides {
            semantic_ranker: Some(true),
            semantic_captions: Some(false),
            top: Some(5),
            temperature: Some(0.3),
            prompt_template: Some("t".into()),
            prompt_template_prefix: Some("p".into()),
            prompt_template_suffix: Some("s".into()),
            exclude_category: Some("x".into()),
            suggest_followup_questions: Some(true),
            user_persona: Some("u".into()),
            system_persona: Some("sp".into()),
            ai_persona: Some("a".into()),
            response_length: Some(2048),
            response_temp: Some(0.6),
            selected_folders: Some("All".into()),
            selected_tags: Some("hr,legal".into()),
        };
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(
            keys(&v),
            [
                "ai_persona",
                "exclude_category",
                "prompt_template",
                "prompt_template_prefix",
                "prompt_template_suffix",
                "response_length",
                "response_temp",
                "selected_folders",
                "selected_tags",
                "semantic_captions",
                "semantic_ranker",
                "suggest_followup_questions",
                "system_persona",
                "temperature",
                "top",
                "user_persona",
            ]
        );
    }

    #[test]
    fn ask_projection_drops_chat_only_fields() {
        let o = Overrides {
            top: Some(3),
            ai_persona: Some("Assistant".into()),
            suggest_followup_questions: Some(true),
            response_length: Some(1024),
            response_temp: Some(0.1),
            selected_folders: Some("All".into()),
            selected_tags: Some("a".into()),
            ..Default::default()
        };
        let req = AskRequest::new("what is x?", Approach::RetrieveThenRead).with_overrides(o);
        let v = serde_json::to_value(req.body()).unwrap();

        assert_eq!(
            v,
            json!({
                "question": "what is x?",
                "approach": "rtr",
                "overrides": { "top": 3, "ai_persona": "Assistant" },
                "input_audio_path": ""
            })
        );
    }

    #[test]
    fn missing_overrides_serialize_as_empty_object() {
        let ask = AskRequest::new("q", Approach::ReadDecomposeAsk);
        let v = serde_json::to_value(ask.body()).unwrap();
        assert_eq!(v["overrides"], json!({}));

        let chat = ChatRequest::new(vec![], Approach::ReadRetrieveRead);
        let v = serde_json::to_value(chat.body()).unwrap();
        assert_eq!(v["overrides"], json!({}));
        assert_eq!(v["history"], json!([]));
        assert_eq!(v["input_audio_path"], "");
    }

    #[test]
    fn chat_request_survives_echo() {
        let history = vec![
            ChatTurn::answered("first", "one"),
            ChatTurn::answered("second", "two"),
            ChatTurn::user("third"),
        ];
        let overrides = Overrides {
            top: Some(7),
            temperature: Some(0.1 + 0.2),
            response_temp: Some(1e-7),
            suggest_followup_questions: Some(false),
            selected_tags: Some("ünïcode,tags".into()),
            ..Default::default()
        };
        let req = ChatRequest::new(history, Approach::ReadRetrieveRead).with_overrides(overrides);

        let wire = serde_json::to_string(&req.body()).unwrap();
        let echoed: ChatRequest = serde_json::from_str(&wire).unwrap();

        assert_eq!(echoed, req);
        let temp = echoed.overrides.unwrap().temperature.unwrap();
        assert_eq!(temp.to_bits(), (0.1f64 + 0.2).to_bits());
    }

    #[test]
    fn bot_reply_is_omitted_until_answered() {
        let v = serde_json::to_value(ChatTurn::user("hello")).unwrap();
        assert_eq!(v, json!({ "user": "hello" }));
    }

    #[test]
    fn approach_codes_round_trip() {
        for a in [
            Approach::RetrieveThenRead,
            Approach::ReadRetrieveRead,
            Approach::ReadDecomposeAsk,
        ] {
            assert_eq!(a.to_string().parse::<Approach>().unwrap(), a);
            assert_eq!(serde_json::to_value(a).unwrap(), a.code());
        }
        assert!("xyz".parse::<Approach>().is_err());
    }

    #[test]
    fn answer_tolerates_numeric_page_and_nulls() {
        let body = json!({
            "answer": "See [File0].",
            "thoughts": null,
            "data_points": null,
            "citation_lookup": {
                "File0": { "citation": "c0", "source_path": "upload/a.pdf", "page_number": 4 },
                "File1": { "citation": "c1", "source_path": "upload/b.pdf", "page_number": "12" }
            }
        });
        let r: AskResponse = serde_json::from_value(body).unwrap();
        assert_eq!(r.thoughts, None);
        assert!(r.data_points.is_empty());
        assert_eq!(r.citation_lookup["File0"].page_number, "4");
        assert_eq!(r.citation_lookup["File1"].page_number, "12");
        assert_eq!(r.error, None);
    }
}
