use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::ast::{Expr, Module, Program};
use swc_core::ecma::codegen::{text_writer::JsWriter, Config, Emitter, Node};
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, PResult, Parser, StringInput, Syntax};

use crate::config::Config as PluginConfig;

fn parse<T>(code: &str, f: impl FnOnce(&mut Parser<Lexer<'_>>) -> PResult<T>) -> T {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(Lrc::new(FileName::Custom("test.jsx".into())), code.to_string());
    let lexer = Lexer::new(
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        Default::default(),
        StringInput::from(&*fm),
        None,
    );
    let mut parser = Parser::new_from(lexer);
    let parsed = f(&mut parser).expect("failed to parse test input");
    assert!(parser.take_errors().is_empty());
    parsed
}

pub fn parse_module(code: &str) -> Module {
    parse(code, |p| p.parse_module())
}

pub fn parse_expr(code: &str) -> Box<Expr> {
    parse(code, |p| p.parse_expr())
}

pub fn to_str(node: &impl Node) -> String {
    let cm: Lrc<SourceMap> = Default::default();
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: Config::default(),
            comments: None,
            cm,
            wr: writer,
        };
        node.emit_with(&mut emitter).expect("failed to emit node");
    }
    normalize(&String::from_utf8(buf).expect("emitted code is not valid UTF-8"))
}

fn normalize(code: &str) -> String {
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Runs the full transform over `input` and prints the result.
pub fn transform(input: &str) -> String {
    transform_with(input, &PluginConfig::default())
}

pub fn transform_with(input: &str, config: &PluginConfig) -> String {
    let mut program = Program::Module(parse_module(input));
    crate::transform_program(&mut program, config);
    match program {
        Program::Module(m) => to_str(&m),
        Program::Script(s) => to_str(&s),
    }
}

/// Prints `expected` through the same parser and emitter, so the comparison
/// ignores formatting.
pub fn expected(code: &str) -> String {
    to_str(&parse_module(code))
}

#[track_caller]
pub fn assert_transform(input: &str, want: &str) {
    assert_eq!(transform(input), expected(want));
}
