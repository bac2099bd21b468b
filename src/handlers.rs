//! Event-handler shapes.
//!
//! Web inputs report changes through an event (`e.target.value`); native text
//! inputs pass the new value directly. Only handlers of exactly the shape
//! `e => f(e.target.value)` are translated, anything else stays as written.

use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::ast::*,
};

use crate::jsx;

pub const ON_CLICK: &str = "onClick";
pub const ON_PRESS: &str = "onPress";
pub const ON_CHANGE: &str = "onChange";
pub const ON_CHANGE_TEXT: &str = "onChangeText";
pub const ON_CHECKED_CHANGE: &str = "onCheckedChange";

const VALUE_PARAM: &str = "value";

/// Name of `f` when `value` is `{e => f(e.target.value)}`.
pub fn target_value_callee(value: &JSXAttrValue) -> Option<String> {
    let JSXAttrValue::JSXExprContainer(container) = value else {
        return None;
    };
    let JSXExpr::Expr(expr) = &container.expr else {
        return None;
    };
    let Expr::Arrow(arrow) = &**expr else {
        return None;
    };
    let [Pat::Ident(param)] = arrow.params.as_slice() else {
        return None;
    };
    let BlockStmtOrExpr::Expr(body) = &*arrow.body else {
        return None;
    };
    let Expr::Call(call) = unwrap_parens(body) else {
        return None;
    };
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Ident(callee) = &**callee else {
        return None;
    };
    let [arg] = call.args.as_slice() else {
        return None;
    };
    if arg.spread.is_some() {
        return None;
    }

    // e.target.value
    let Expr::Member(outer) = &*arg.expr else {
        return None;
    };
    let Expr::Member(inner) = &*outer.obj else {
        return None;
    };
    let Expr::Ident(root) = &*inner.obj else {
        return None;
    };
    let (MemberProp::Ident(target), MemberProp::Ident(val)) = (&inner.prop, &outer.prop) else {
        return None;
    };
    if root.sym != param.id.sym || target.sym.as_ref() != "target" || val.sym.as_ref() != "value" {
        return None;
    }

    Some(callee.sym.to_string())
}

fn unwrap_parens(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(p) = expr {
        expr = &p.expr;
    }
    expr
}

/// `value => callee(value)`
pub fn value_forwarder(callee: &str) -> Expr {
    let call = Expr::Call(CallExpr {
        span: DUMMY_SP,
        callee: Callee::Expr(Box::new(Expr::Ident(jsx::ident(callee)))),
        args: vec![ExprOrSpread {
            spread: None,
            expr: Box::new(Expr::Ident(jsx::ident(VALUE_PARAM))),
        }],
        type_args: None,
        ctxt: SyntaxContext::empty(),
    });
    arrow(
        vec![Pat::Ident(BindingIdent {
            id: jsx::ident(VALUE_PARAM),
            type_ann: None,
        })],
        BlockStmtOrExpr::Expr(Box::new(call)),
    )
}

/// `() => {}`
pub fn noop() -> Expr {
    arrow(
        vec![],
        BlockStmtOrExpr::BlockStmt(BlockStmt {
            span: DUMMY_SP,
            stmts: vec![],
            ctxt: SyntaxContext::empty(),
        }),
    )
}

fn arrow(params: Vec<Pat>, body: BlockStmtOrExpr) -> Expr {
    Expr::Arrow(ArrowExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        params,
        body: Box::new(body),
        is_async: false,
        is_generator: false,
        type_params: None,
        return_type: None,
    })
}
