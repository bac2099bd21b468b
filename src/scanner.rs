//! Read-only usage queries over a module.
//!
//! Nothing is cached: every query walks the whole module again, so results
//! always describe the tree as it is at the time of the call.

use swc_core::ecma::{
    ast::*,
    visit::{Visit, VisitWith},
};

use crate::jsx;

// -----------------------------------------------------------------------------
// Usage queries
// -----------------------------------------------------------------------------

pub const INPUT_TAG: &str = "input";

pub struct UsageScanner<'a> {
    module: &'a Module,
}

impl<'a> UsageScanner<'a> {
    pub fn new(module: &'a Module) -> Self {
        Self { module }
    }

    /// True iff some import from `source` binds `imported` by name.
    pub fn import_exists(&self, source: &str, imported: &str) -> bool {
        self.module.body.iter().any(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) => {
                decl.src.value.to_string() == source
                    && named_imports(decl).any(|name| name == imported)
            }
            _ => false,
        })
    }

    pub fn tag_used(&self, tag: &str) -> bool {
        self.any_element(|el| jsx::tag_of(&el.opening.name) == Some(tag))
    }

    /// An `<input type="checkbox">` exists.
    pub fn checkbox_input_exists(&self) -> bool {
        self.any_element(|el| is_input(el) && is_checkbox(&el.opening.attrs))
    }

    /// An `<input>` exists that is not a checkbox, including one with no `type`.
    pub fn plain_input_exists(&self) -> bool {
        self.any_element(|el| is_input(el) && !is_checkbox(&el.opening.attrs))
    }

    fn any_element(&self, pred: impl Fn(&JSXElement) -> bool) -> bool {
        let mut finder = ElementFinder { pred, found: false };
        self.module.visit_with(&mut finder);
        finder.found
    }
}

fn is_input(el: &JSXElement) -> bool {
    jsx::tag_of(&el.opening.name) == Some(INPUT_TAG)
}

pub fn is_checkbox(attrs: &[JSXAttrOrSpread]) -> bool {
    jsx::has_string_attr(attrs, "type", "checkbox")
}

// -----------------------------------------------------------------------------
// Import bindings
// -----------------------------------------------------------------------------

/// Imported names of the `{ a, b as c }` bindings of an import statement.
/// Default and namespace bindings are skipped.
pub fn named_imports(decl: &ImportDecl) -> impl Iterator<Item = String> + '_ {
    decl.specifiers.iter().filter_map(|s| match s {
        ImportSpecifier::Named(named) => Some(
            named
                .imported
                .as_ref()
                .map(|i| match i {
                    ModuleExportName::Ident(i) => i.sym.to_string(),
                    ModuleExportName::Str(s) => s.value.to_string(),
                })
                .unwrap_or_else(|| named.local.sym.to_string()),
        ),
        _ => None,
    })
}

struct ElementFinder<F> {
    pred: F,
    found: bool,
}

impl<F: Fn(&JSXElement) -> bool> Visit for ElementFinder<F> {
    fn visit_jsx_element(&mut self, n: &JSXElement) {
        if self.found {
            return;
        }
        if (self.pred)(n) {
            self.found = true;
            return;
        }
        n.visit_children_with(self);
    }
}
