//! Markdown rendering with per-element rule overrides

use lazy_static::lazy_static;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use super::{ContentError, FrontMatter};
use crate::config::StyleConfig;

lazy_static! {
    /// `![alt](<path>/public/<rest>)`, capturing around the `/public` segment
    static ref PUBLIC_IMAGE_RE: Regex =
        Regex::new(r"(!\[[^\]]*\]\([^)]*)/public(/[^)]+\))").unwrap();
}

/// Element kinds whose opening tag can be overridden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Heading,
    Paragraph,
    BulletList,
    ListItem,
}

/// An opening tag about to be written, with what a rule needs to format it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTag {
    Heading { level: u8 },
    Paragraph,
    BulletList,
    ListItem,
}

impl OpenTag {
    pub fn kind(&self) -> NodeKind {
        match self {
            OpenTag::Heading { .. } => NodeKind::Heading,
            OpenTag::Paragraph => NodeKind::Paragraph,
            OpenTag::BulletList => NodeKind::BulletList,
            OpenTag::ListItem => NodeKind::ListItem,
        }
    }
}

/// Formats the opening tag of one element kind
pub type Rule = Arc<dyn Fn(&OpenTag) -> String + Send + Sync>;

/// Opening-tag overrides passed into a render call.
///
/// Kinds without a rule fall back to pulldown-cmark's default HTML; closing
/// tags are always the defaults.
#[derive(Clone, Default)]
pub struct RenderRules {
    rules: HashMap<NodeKind, Rule>,
}

impl RenderRules {
    /// No overrides, plain pulldown-cmark output
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `kind`
    pub fn with<F>(mut self, kind: NodeKind, rule: F) -> Self
    where
        F: Fn(&OpenTag) -> String + Send + Sync + 'static,
    {
        self.rules.insert(kind, Arc::new(rule));
        self
    }

    /// The blog post presentation: sized accent headings, spaced paragraphs,
    /// disc bullet lists and tight list items
    pub fn styled(style: &StyleConfig) -> Self {
        let heading_accent = style.heading_accent.clone();
        let heading_weight = style.heading_weight.clone();
        let paragraph = format!(r#"<p class="{}">"#, style.paragraph);
        let bullet_list = format!(r#"<ul class="{}">"#, style.bullet_list);
        let list_item = format!(r#"<li class="{}">"#, style.list_item);

        Self::new()
            .with(NodeKind::Heading, move |tag| {
                let level = match tag {
                    OpenTag::Heading { level } => *level,
                    _ => 1,
                };
                format!(
                    r#"<h{} class="{} {} {}">"#,
                    level,
                    size_class(heading_size(level)),
                    heading_accent,
                    heading_weight
                )
            })
            .with(NodeKind::Paragraph, move |_| paragraph.clone())
            .with(NodeKind::BulletList, move |_| bullet_list.clone())
            .with(NodeKind::ListItem, move |_| list_item.clone())
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.rules.contains_key(&kind)
    }

    fn open(&self, tag: &OpenTag) -> Option<String> {
        self.rules.get(&tag.kind()).map(|rule| rule(tag))
    }
}

impl std::fmt::Debug for RenderRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.rules.keys()).finish()
    }
}

/// Size step for a heading level: 5 for `h1` down to 0 for `h6`
pub fn heading_size(level: u8) -> u8 {
    5u8.saturating_sub(level.saturating_sub(1))
}

/// Class for a size step; steps below 2 map onto the named sizes
pub fn size_class(size: u8) -> String {
    match size {
        0 => "text-lg".to_string(),
        1 => "text-xl".to_string(),
        n => format!("text-{}xl", n),
    }
}

/// Strip `/public` from the URL of every markdown image reference
pub fn rewrite_image_paths(markdown: &str) -> Cow<'_, str> {
    PUBLIC_IMAGE_RE.replace_all(markdown, "${1}${2}")
}

/// Render markdown to HTML with the given rule overrides
pub fn render_with(markdown: &str, rules: &RenderRules) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let events = parser.map(|event| {
        // raw HTML in a post is shown as text
        let event = match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        };

        let open = match &event {
            Event::Start(Tag::Heading { level, .. }) => Some(OpenTag::Heading {
                level: *level as u8,
            }),
            Event::Start(Tag::Paragraph) => Some(OpenTag::Paragraph),
            Event::Start(Tag::List(None)) => Some(OpenTag::BulletList),
            Event::Start(Tag::Item) => Some(OpenTag::ListItem),
            _ => None,
        };

        match open.and_then(|tag| rules.open(&tag)) {
            Some(markup) => Event::Html(CowStr::from(markup)),
            None => event,
        }
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);
    html_output
}

/// Markdown renderer holding the rule set used for every post
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    rules: RenderRules,
}

impl MarkdownRenderer {
    /// Create a renderer with the default post styling
    pub fn new() -> Self {
        Self::from_style(&StyleConfig::default())
    }

    /// Create a renderer styled from configuration
    pub fn from_style(style: &StyleConfig) -> Self {
        Self::with_rules(RenderRules::styled(style))
    }

    /// Create with an explicit rule set
    pub fn with_rules(rules: RenderRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RenderRules {
        &self.rules
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        render_with(markdown, &self.rules)
    }

    /// Rewrite image paths, split off the front-matter and render the body
    pub fn render_document(&self, source: &str) -> Result<(FrontMatter, String), ContentError> {
        let source = rewrite_image_paths(source);
        let (fm, body) = FrontMatter::parse(&source)?;
        Ok((fm, self.render(body)))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
