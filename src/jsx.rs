//! Small JSX node helpers shared by the scanner, the import synthesizer and
//! the element rewriter.

use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::ast::*,
};

pub fn ident(sym: &str) -> Ident {
    Ident::new(sym.into(), DUMMY_SP, SyntaxContext::empty())
}

fn element_name(tag: &str) -> JSXElementName {
    JSXElementName::Ident(ident(tag))
}

/// Tag of an element named by a plain identifier (`<div>`, `<Badge>`).
/// Member (`<a.b>`) and namespaced (`<a:b>`) names have no tag here.
pub fn tag_of(name: &JSXElementName) -> Option<&str> {
    match name {
        JSXElementName::Ident(id) => Some(id.sym.as_ref()),
        _ => None,
    }
}

/// Renames the opening tag and, when present, the closing tag.
pub fn rename(node: &mut JSXElement, tag: &str) {
    node.opening.name = element_name(tag);
    if let Some(closing) = node.closing.as_mut() {
        closing.name = element_name(tag);
    }
}

pub fn attr_name(attr: &JSXAttr) -> Option<&str> {
    match &attr.name {
        JSXAttrName::Ident(id) => Some(id.sym.as_ref()),
        JSXAttrName::JSXNamespacedName(_) => None,
    }
}

pub fn is_attr(a: &JSXAttrOrSpread, key: &str) -> bool {
    match a {
        JSXAttrOrSpread::JSXAttr(attr) => attr_name(attr) == Some(key),
        JSXAttrOrSpread::SpreadElement(_) => false,
    }
}

/// Literal string value of `key="..."`, if the attribute exists with that shape.
pub fn string_value(attr: &JSXAttr) -> Option<String> {
    match &attr.value {
        Some(JSXAttrValue::Lit(Lit::Str(s))) => Some(s.value.to_string()),
        _ => None,
    }
}

pub fn has_string_attr(attrs: &[JSXAttrOrSpread], key: &str, value: &str) -> bool {
    attrs.iter().any(|a| match a {
        JSXAttrOrSpread::JSXAttr(attr) => {
            attr_name(attr) == Some(key) && string_value(attr).as_deref() == Some(value)
        }
        JSXAttrOrSpread::SpreadElement(_) => false,
    })
}

pub fn find_attr<'a>(attrs: &'a [JSXAttrOrSpread], key: &str) -> Option<&'a JSXAttr> {
    attrs.iter().find_map(|a| match a {
        JSXAttrOrSpread::JSXAttr(attr) if attr_name(attr) == Some(key) => Some(attr),
        _ => None,
    })
}

pub fn set_attr_name(attr: &mut JSXAttr, key: &str) {
    attr.name = JSXAttrName::Ident(IdentName::new(key.into(), DUMMY_SP));
}

pub fn string_attr(key: &str, val: String) -> JSXAttrOrSpread {
    JSXAttrOrSpread::JSXAttr(JSXAttr {
        span: DUMMY_SP,
        name: JSXAttrName::Ident(IdentName::new(key.into(), DUMMY_SP)),
        value: Some(string_lit(val)),
    })
}

pub fn string_lit(val: String) -> JSXAttrValue {
    JSXAttrValue::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: val.into(),
        raw: None,
    }))
}

pub fn expr_attr(key: &str, expr: Expr) -> JSXAttrOrSpread {
    JSXAttrOrSpread::JSXAttr(JSXAttr {
        span: DUMMY_SP,
        name: JSXAttrName::Ident(IdentName::new(key.into(), DUMMY_SP)),
        value: Some(expr_value(expr)),
    })
}

/// `{expr}`
pub fn expr_value(expr: Expr) -> JSXAttrValue {
    JSXAttrValue::JSXExprContainer(JSXExprContainer {
        span: DUMMY_SP,
        expr: JSXExpr::Expr(Box::new(expr)),
    })
}

/// `<tag {attrs}>{children}</tag>`
pub fn element(tag: &str, attrs: Vec<JSXAttrOrSpread>, children: Vec<JSXElementChild>) -> JSXElement {
    JSXElement {
        span: DUMMY_SP,
        opening: JSXOpeningElement {
            name: element_name(tag),
            attrs,
            self_closing: false,
            type_args: None,
            span: DUMMY_SP,
        },
        children,
        closing: Some(JSXClosingElement {
            span: DUMMY_SP,
            name: element_name(tag),
        }),
    }
}
