//! Element rewriting: per-tag structural rules followed by a uniform pass over
//! every element's attributes.

use swc_core::{
    common::DUMMY_SP,
    ecma::{
        ast::*,
        visit::{VisitMut, VisitMutWith},
    },
};
use tracing::{debug, trace};

use crate::{
    class_names::{self, CLASS_NAME},
    handlers::{self, ON_CHANGE, ON_CHANGE_TEXT, ON_CHECKED_CHANGE, ON_CLICK, ON_PRESS},
    jsx,
    scanner::{self, INPUT_TAG},
    tags,
};

// -----------------------------------------------------------------------------
// Tag rules
// -----------------------------------------------------------------------------

const LIST_CLASSES: &str = "flex flex-col gap-1";
const LIST_ITEM_CLASSES: &str = "list-decimal list-inside";
const BADGE_TEXT_CLASSES: &str = "text-md font-medium";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Plain tag substitution.
    Rename(&'static str),
    /// `<img src>` -> `<Image source>`.
    Image,
    /// `<ol>` becomes a flex column, its `<li>` children become list text.
    OrderedList,
    /// Checkbox or text field, depending on `type="checkbox"`.
    Input,
    /// Bare text and expressions inside a badge need a text wrapper.
    Badge,
}

pub const TAG_RULES: &[(&str, TagRule)] = &[
    ("div", TagRule::Rename(tags::VIEW)),
    ("p", TagRule::Rename(tags::TEXT)),
    ("span", TagRule::Rename(tags::TEXT)),
    ("h1", TagRule::Rename(tags::TEXT)),
    ("h2", TagRule::Rename(tags::TEXT)),
    ("h3", TagRule::Rename(tags::TEXT)),
    ("h4", TagRule::Rename(tags::TEXT)),
    ("h5", TagRule::Rename(tags::TEXT)),
    ("h6", TagRule::Rename(tags::TEXT)),
    ("h7", TagRule::Rename(tags::TEXT)),
    ("strong", TagRule::Rename(tags::TEXT)),
    ("label", TagRule::Rename(tags::TEXT)),
    ("button", TagRule::Rename(tags::BUTTON)),
    ("img", TagRule::Image),
    ("a", TagRule::Rename(tags::LINK)),
    ("ol", TagRule::OrderedList),
    (INPUT_TAG, TagRule::Input),
    ("Badge", TagRule::Badge),
];

pub fn tag_rule(tag: &str) -> Option<TagRule> {
    TAG_RULES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, rule)| *rule)
}

// -----------------------------------------------------------------------------
// Rewriter
// -----------------------------------------------------------------------------

/// Visits every JSX element once, parents before children. Rules look at the
/// tag an element has when it is reached, so children renamed by their
/// parent's rule are not matched again under their old name.
#[derive(Default)]
pub struct ElementRewriter;

impl VisitMut for ElementRewriter {
    fn visit_mut_jsx_element(&mut self, node: &mut JSXElement) {
        let tag = jsx::tag_of(&node.opening.name).map(str::to_string);

        if let Some(rule) = tag.as_deref().and_then(tag_rule) {
            apply_tag_rule(node, rule);
        }
        rewrite_attrs(&mut node.opening.attrs, tag.as_deref() == Some(INPUT_TAG));

        node.visit_mut_children_with(self);
    }
}

pub fn apply_tag_rule(node: &mut JSXElement, rule: TagRule) {
    match rule {
        TagRule::Rename(to) => rename(node, to),
        TagRule::Image => {
            rename(node, tags::IMAGE);
            for a in node.opening.attrs.iter_mut() {
                if let JSXAttrOrSpread::JSXAttr(attr) = a {
                    if jsx::attr_name(attr) == Some("src") {
                        jsx::set_attr_name(attr, "source");
                    }
                }
            }
        }
        TagRule::OrderedList => {
            rename(node, tags::VIEW);
            force_classes(&mut node.opening.attrs, LIST_CLASSES);
            for child in node.children.iter_mut() {
                if let JSXElementChild::JSXElement(item) = child {
                    if jsx::tag_of(&item.opening.name) == Some("li") {
                        rename(item, tags::TEXT);
                        force_classes(&mut item.opening.attrs, LIST_ITEM_CLASSES);
                    }
                }
            }
        }
        TagRule::Input => {
            let checkbox = scanner::is_checkbox(&node.opening.attrs);
            node.opening.attrs.retain(|a| !jsx::is_attr(a, "type"));
            if checkbox {
                rename(node, tags::CHECKBOX);
                node.opening.attrs.push(jsx::expr_attr(
                    "checked",
                    Expr::Lit(Lit::Bool(Bool {
                        span: DUMMY_SP,
                        value: true,
                    })),
                ));
                node.opening
                    .attrs
                    .push(jsx::expr_attr(ON_CHECKED_CHANGE, handlers::noop()));
            } else {
                rename(node, tags::INPUT);
            }
        }
        TagRule::Badge => {
            let children = std::mem::take(&mut node.children);
            node.children = children.into_iter().map(wrap_badge_child).collect();
        }
    }
}

fn rename(node: &mut JSXElement, to: &str) {
    debug!(
        from = jsx::tag_of(&node.opening.name).unwrap_or_default(),
        to, "renamed element"
    );
    jsx::rename(node, to);
}

/// Sets `className` to `forced`, appended to the old value when that was a
/// string literal, and moves it to the end of the attribute list. Any other
/// `className` value is dropped.
fn force_classes(attrs: &mut Vec<JSXAttrOrSpread>, forced: &str) {
    let existing = match jsx::find_attr(attrs, CLASS_NAME) {
        Some(attr) => match &attr.value {
            Some(JSXAttrValue::Lit(Lit::Str(_))) => jsx::string_value(attr),
            None => None,
            Some(_) => {
                trace!(forced, "replacing dynamic className");
                None
            }
        },
        None => None,
    };
    let value = class_names::append_tokens(existing.as_deref(), forced);
    attrs.retain(|a| !jsx::is_attr(a, CLASS_NAME));
    attrs.push(jsx::string_attr(CLASS_NAME, value));
}

fn wrap_badge_child(child: JSXElementChild) -> JSXElementChild {
    match child {
        JSXElementChild::JSXText(t) if t.value.trim().is_empty() => JSXElementChild::JSXText(t),
        JSXElementChild::JSXText(t) => {
            let attrs = vec![jsx::string_attr(CLASS_NAME, BADGE_TEXT_CLASSES.to_string())];
            text_wrapper(attrs, JSXElementChild::JSXText(t))
        }
        JSXElementChild::JSXExprContainer(c) => {
            text_wrapper(vec![], JSXElementChild::JSXExprContainer(c))
        }
        other => other,
    }
}

fn text_wrapper(attrs: Vec<JSXAttrOrSpread>, child: JSXElementChild) -> JSXElementChild {
    debug!("wrapped badge child in text");
    JSXElementChild::JSXElement(Box::new(jsx::element(tags::TEXT, attrs, vec![child])))
}

// -----------------------------------------------------------------------------
// Attribute pass
// -----------------------------------------------------------------------------

/// Applied to every element regardless of tag. `is_input` refers to the tag
/// the element had before its structural rule ran.
pub fn rewrite_attrs(attrs: &mut Vec<JSXAttrOrSpread>, is_input: bool) {
    if is_input {
        attrs.retain(|a| match a {
            JSXAttrOrSpread::JSXAttr(attr) => {
                !(jsx::attr_name(attr) == Some("type") && jsx::string_value(attr).as_deref() == Some("text"))
            }
            JSXAttrOrSpread::SpreadElement(_) => true,
        });
    }

    for a in attrs.iter_mut() {
        let JSXAttrOrSpread::JSXAttr(attr) = a else {
            continue;
        };
        let name = jsx::attr_name(attr).map(str::to_string);
        match name.as_deref() {
            Some(CLASS_NAME) => {
                let Some(value) = jsx::string_value(attr) else {
                    continue;
                };
                if let Some(rewritten) = class_names::rewrite_spacing(&value) {
                    debug!(from = %value, to = %rewritten, "rewrote spacing classes");
                    attr.value = Some(jsx::string_lit(rewritten));
                }
            }
            Some(ON_CLICK) => jsx::set_attr_name(attr, ON_PRESS),
            Some(ON_CHANGE) => {
                match attr.value.as_ref().and_then(handlers::target_value_callee) {
                    Some(callee) => {
                        debug!(callee = %callee, "rewrote onChange to onChangeText");
                        jsx::set_attr_name(attr, ON_CHANGE_TEXT);
                        attr.value = Some(jsx::expr_value(handlers::value_forwarder(&callee)));
                    }
                    None => trace!("onChange handler shape not recognised"),
                }
            }
            _ => {}
        }
    }
}
