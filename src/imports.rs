//! Import synthesis: icon-bundle splitting and component imports.

use swc_core::{
    common::DUMMY_SP,
    ecma::ast::{ImportPhase, *},
};
use tracing::debug;

use crate::{
    config::{ComponentModule, Config},
    jsx,
    scanner::{named_imports, UsageScanner},
    tags,
};

// -----------------------------------------------------------------------------
// Component import rules
// -----------------------------------------------------------------------------

/// What makes a component import necessary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    AnyTag(&'static [&'static str]),
    CheckboxInput,
    PlainInput,
}

impl Trigger {
    fn fires(self, scanner: &UsageScanner) -> bool {
        match self {
            Trigger::AnyTag(names) => names.iter().any(|t| scanner.tag_used(t)),
            Trigger::CheckboxInput => scanner.checkbox_input_exists(),
            Trigger::PlainInput => scanner.plain_input_exists(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImportRule {
    pub trigger: Trigger,
    pub module: ComponentModule,
    pub ident: &'static str,
}

/// Evaluated top to bottom; each hit is inserted at index 0, so the emitted
/// imports end up in reverse table order.
pub const IMPORT_RULES: &[ImportRule] = &[
    ImportRule {
        trigger: Trigger::AnyTag(&["div", "ol"]),
        module: ComponentModule::View,
        ident: tags::VIEW,
    },
    ImportRule {
        trigger: Trigger::AnyTag(&["img"]),
        module: ComponentModule::Image,
        ident: tags::IMAGE,
    },
    ImportRule {
        trigger: Trigger::AnyTag(&[
            "p", "span", "h1", "h2", "h3", "h4", "h5", "h6", "h7", "strong", "label", "Badge", "ol", "li",
        ]),
        module: ComponentModule::Text,
        ident: tags::TEXT,
    },
    ImportRule {
        trigger: Trigger::AnyTag(&["button"]),
        module: ComponentModule::Button,
        ident: tags::BUTTON,
    },
    ImportRule {
        trigger: Trigger::CheckboxInput,
        module: ComponentModule::Checkbox,
        ident: tags::CHECKBOX,
    },
    ImportRule {
        trigger: Trigger::AnyTag(&["a"]),
        module: ComponentModule::Link,
        ident: tags::LINK,
    },
    ImportRule {
        trigger: Trigger::PlainInput,
        module: ComponentModule::Input,
        ident: tags::INPUT,
    },
];

// -----------------------------------------------------------------------------
// Synthesis
// -----------------------------------------------------------------------------

/// `import { ident } from "source";`
pub fn named_import(ident: &str, source: &str) -> ModuleItem {
    ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl {
        span: DUMMY_SP,
        specifiers: vec![ImportSpecifier::Named(ImportNamedSpecifier {
            span: DUMMY_SP,
            local: jsx::ident(ident),
            imported: None,
            is_type_only: false,
        })],
        src: Box::new(Str {
            span: DUMMY_SP,
            value: source.into(),
            raw: None,
        }),
        type_only: false,
        with: None,
        phase: ImportPhase::Evaluation,
    }))
}

/// Runs both synthesis steps. Must see the module before any element is
/// renamed, since every trigger is phrased in web tag names.
pub fn synthesize(m: &mut Module, config: &Config) {
    split_icon_bundle(m, config);
    add_component_imports(m, config);
}

/// Replaces every `import { A, B } from "<icon bundle>"` with one
/// `import { A } from "<icons root>/A"` per icon actually rendered as a tag.
///
/// Each icon import goes directly after the bundle statement, pushing the
/// previous ones down, so `{ A, B }` comes out as `B` then `A`.
pub fn split_icon_bundle(m: &mut Module, config: &Config) {
    let mut idx = 0;
    while idx < m.body.len() {
        let icons: Vec<String> = match &m.body[idx] {
            ModuleItem::ModuleDecl(ModuleDecl::Import(decl))
                if decl.src.value.to_string() == config.icon_bundle =>
            {
                named_imports(decl).collect()
            }
            _ => vec![],
        };
        if icons.is_empty() {
            idx += 1;
            continue;
        }

        let mut inserted = 0;
        for icon in icons {
            let source = config.icon_module(&icon);
            let scanner = UsageScanner::new(m);
            if !scanner.tag_used(&icon) || scanner.import_exists(&source, &icon) {
                continue;
            }
            debug!(icon = %icon, source = %source, "split icon import");
            m.body.insert(idx + 1, named_import(&icon, &source));
            inserted += 1;
        }

        m.body.remove(idx);
        debug!(bundle = %config.icon_bundle, "removed icon bundle import");
        idx += inserted;
    }
}

pub fn add_component_imports(m: &mut Module, config: &Config) {
    for rule in IMPORT_RULES {
        let source = config.component_module(rule.module);
        let scanner = UsageScanner::new(m);
        if scanner.import_exists(source, rule.ident) || !rule.trigger.fires(&scanner) {
            continue;
        }
        debug!(ident = rule.ident, source = %source, "added component import");
        let item = named_import(rule.ident, source);
        m.body.insert(0, item);
    }
}
