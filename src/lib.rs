use swc_core::{
    ecma::{
        ast::*,
        visit::{VisitMut, VisitMutWith},
    },
    plugin::{plugin_transform, proxies::TransformPluginProgramMetadata},
};
use tracing::warn;

pub mod class_names;
pub mod config;
pub mod error;
pub mod handlers;
pub mod imports;
pub mod jsx;
pub mod rewrite;
pub mod scanner;
pub mod tags;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::ConfigError;
use rewrite::ElementRewriter;

// -----------------------------------------------------------------------------
// Transform
// -----------------------------------------------------------------------------

/// Web JSX -> native components, one module at a time.
///
/// Imports are synthesized first, while the tree still carries web tag names;
/// elements are rewritten afterwards in a single walk.
pub struct NativeTransform {
    config: Config,
}

impl NativeTransform {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl VisitMut for NativeTransform {
    fn visit_mut_module(&mut self, m: &mut Module) {
        imports::synthesize(m, &self.config);
        m.visit_mut_children_with(&mut ElementRewriter);
    }

    // Scripts cannot hold import declarations; only elements are rewritten.
    fn visit_mut_script(&mut self, s: &mut Script) {
        s.visit_mut_children_with(&mut ElementRewriter);
    }
}

pub fn transform_program(program: &mut Program, config: &Config) {
    program.visit_mut_with(&mut NativeTransform::new(config.clone()));
}

// -----------------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------------

#[plugin_transform]
pub fn process_transform(mut program: Program, metadata: TransformPluginProgramMetadata) -> Program {
    let config = metadata
        .get_transform_plugin_config()
        .map(|raw| {
            Config::from_json(&raw).unwrap_or_else(|err| {
                warn!(%err, "falling back to default plugin config");
                Config::default()
            })
        })
        .unwrap_or_default();

    transform_program(&mut program, &config);
    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_transform, expected, parse_module, to_str, transform, transform_with};

    #[test]
    fn converts_a_small_screen() {
        assert_transform(
            r#"
            import { useState } from "react";
            import { Plus, Trash } from "lucide-react";

            export default function Todo() {
                const [name, setName] = useState("");
                return (
                    <div className="p-4 space-y-2">
                        <h1>Todos</h1>
                        <input type="text" onChange={e => setName(e.target.value)} />
                        <button onClick={() => add(name)}><Plus /></button>
                    </div>
                );
            }
            "#,
            r#"
            import { Input } from "@/components/ui/input";
            import { Button } from "@/components/ui/button";
            import { Text } from "@/components/ui/text";
            import { View } from "react-native";
            import { useState } from "react";
            import { Plus } from "@/components/icons/Plus";

            export default function Todo() {
                const [name, setName] = useState("");
                return (
                    <View className="p-4 gap-2 flex-col flex">
                        <Text>Todos</Text>
                        <Input onChangeText={value => setName(value)} />
                        <Button onPress={() => add(name)}><Plus /></Button>
                    </View>
                );
            }
            "#,
        );
    }

    #[test]
    fn list_and_checkbox_screen() {
        assert_transform(
            r#"
            const List = () => (
                <ol>
                    <li>First</li>
                    <li><label>Done <input type="checkbox" /></label></li>
                </ol>
            );
            "#,
            r#"
            import { Checkbox } from "@/components/ui/checkbox";
            import { Text } from "@/components/ui/text";
            import { View } from "react-native";
            const List = () => (
                <View className="flex flex-col gap-1">
                    <Text className="list-decimal list-inside">First</Text>
                    <Text className="list-decimal list-inside"><Text>Done <Checkbox checked={true} onCheckedChange={() => {}} /></Text></Text>
                </View>
            );
            "#,
        );
    }

    #[test]
    fn link_image_and_badge() {
        assert_transform(
            r#"
            import { Badge } from "@/components/ui/badge";
            const Card = () => (
                <a href="/home"><img src={cover} /><Badge>{count} new</Badge></a>
            );
            "#,
            r#"
            import { Link } from "expo-router";
            import { Text } from "@/components/ui/text";
            import { Image } from "expo-image";
            import { Badge } from "@/components/ui/badge";
            const Card = () => (
                <Link href="/home"><Image source={cover} /><Badge><Text>{count}</Text><Text className="text-md font-medium"> new</Text></Badge></Link>
            );
            "#,
        );
    }

    #[test]
    fn plain_module_is_unchanged() {
        let src = r#"
            import { Card } from "@/components/ui/card";
            export const App = () => <Card title="x"><Avatar /></Card>;
        "#;
        assert_transform(src, src);
    }

    #[test]
    fn single_run_is_deterministic() {
        let src = r#"
            import { X } from "lucide-react";
            const a = <div><p className="space-x-1">t</p><X /><input /></div>;
        "#;
        assert_eq!(transform(src), transform(src));
    }

    #[test]
    fn second_run_does_not_redo_imports() {
        let once = transform(r#"const a = <div><span>hi</span></div>;"#);
        let mut program = Program::Module(parse_module(&once));
        transform_program(&mut program, &Config::default());
        let Program::Module(twice) = program else {
            unreachable!()
        };
        assert_eq!(to_str(&twice), once);
    }

    #[test]
    fn scripts_only_get_element_rewrites() {
        let mut program = Program::Script(Script {
            span: Default::default(),
            body: parse_module("a = <div onClick={f} />;")
                .body
                .into_iter()
                .filter_map(|item| match item {
                    ModuleItem::Stmt(stmt) => Some(stmt),
                    ModuleItem::ModuleDecl(_) => None,
                })
                .collect(),
            shebang: None,
        });
        transform_program(&mut program, &Config::default());
        let Program::Script(script) = program else {
            unreachable!()
        };
        assert_eq!(to_str(&script), expected("a = <View onPress={f} />;"));
    }

    #[test]
    fn configured_modules_reach_the_output() {
        let config = Config::from_json(r#"{"icon_bundle":"react-feather","icons_root":"~/icons"}"#).unwrap();
        assert_eq!(
            transform_with(
                r#"import { Bell } from "react-feather"; const a = <Bell />;"#,
                &config
            ),
            expected(r#"import { Bell } from "~/icons/Bell"; const a = <Bell />;"#)
        );
    }
}
