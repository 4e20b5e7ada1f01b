/// Integration tests for modport-core
///
/// These tests verify:
/// 1. End-to-end conversion of complete mod sources
/// 2. Ordering of metadata, require and listener sections
/// 3. Converter state across calls and table overlays

use std::path::PathBuf;
use modport_core::{
    convert_files_parallel, format_script, Converter, ConvertError, EventCategory,
    MappingTables, ModuleId, TableOverlay,
};

fn get_test_fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(get_test_fixtures_dir().join(name)).expect("fixture should exist")
}

#[test]
fn test_combathelper_metadata() {
    let script = Converter::new().convert(&fixture("CombatHelper.java")).unwrap();
    let head: Vec<&str> = script.lines().take(4).collect();

    assert_eq!(
        head,
        vec![
            "ModAPI.meta.title(\"combathelper\");",
            "ModAPI.meta.version(\"2.1\");",
            "ModAPI.meta.description(\"Combat Helper\");",
            "",
        ]
    );
    assert_eq!(script.matches("ModAPI.meta.").count(), 3);
}

#[test]
fn test_combathelper_sections() {
    let report = Converter::new().analyze(&fixture("CombatHelper.java")).unwrap();

    let categories: Vec<_> = report.handlers.iter().map(|h| h.category.clone()).collect();
    assert_eq!(
        categories,
        vec![EventCategory::Load, EventCategory::Tick, EventCategory::Render]
    );
    assert_eq!(
        report.required_modules.iter().copied().collect::<Vec<_>>(),
        vec![ModuleId::Player, ModuleId::Resolution]
    );

    let script = &report.script;
    assert!(script.contains("ModAPI.require('player');\nModAPI.require('resolution');"));
    assert!(script.contains("console.log('Combat Helper loaded');"));
    assert!(script.contains("ModAPI.displayToChat(ModAPI.util.str('Low health!'));"));
    assert!(script.contains("if (ModAPI.player === null) {"));
    assert!(script.contains("let res = ModAPI.resolution;"));
    assert!(script.contains("let health = Math.floor(ModAPI.player.getHealth());"));
    assert!(script.contains(".drawString('HP: ' + health"));
    assert!(script.contains("console.error('[onOverlay] Error:', error);"));
}

#[test]
fn test_render_overlay_single_listener_after_header() {
    let source = r#"
        @Mod(modid = "hud")
        public class Hud {
            @SubscribeEvent
            public void draw(RenderGameOverlayEvent.Post event) {
                Minecraft.getMinecraft().thePlayer.getHealth();
            }
        }
    "#;
    let script = Converter::new().convert(source).unwrap();

    assert_eq!(script.matches("ModAPI.addEventListener(").count(), 1);
    assert!(script.contains("ModAPI.addEventListener('render', (event) => {"));

    let first_listener = script
        .lines()
        .position(|l| l.contains("ModAPI.addEventListener("))
        .unwrap();
    let header: Vec<&str> = script
        .lines()
        .take(first_listener)
        .filter(|l| !l.trim().is_empty())
        .collect();
    assert_eq!(header, vec!["ModAPI.meta.title(\"hud\");", "ModAPI.require('player');"]);
}

#[test]
fn test_chat_message_keeps_listener_intact() {
    let source = r#"
        public class Chatty {
            @SubscribeEvent
            public void onTick(TickEvent.ClientTickEvent event) {
                mc.thePlayer.addChatComponentMessage(new ChatComponentText("hi"));
                mc.thePlayer.jump();
            }
        }
    "#;
    let script = Converter::new().convert(source).unwrap();
    let lines: Vec<&str> = script.lines().map(str::trim).collect();

    assert!(lines.contains(&"ModAPI.displayToChat(ModAPI.util.str('hi'));"));
    // The only block close is the final line
    assert_eq!(lines.iter().filter(|l| **l == "});").count(), 1);
    assert_eq!(lines.last(), Some(&"});"));

    let chat = lines.iter().position(|l| l.contains("displayToChat")).unwrap();
    let jump = lines.iter().position(|l| *l == "ModAPI.player.jump();").unwrap();
    let catch = lines.iter().position(|l| *l == "} catch (error) {").unwrap();
    assert!(chat < jump && jump < catch);
}

#[test]
fn test_non_literal_metadata_kept_as_text() {
    let script = Converter::new()
        .convert("@Mod(modid = Reference.MOD_ID, version = Reference.VERSION) class A {}")
        .unwrap();
    assert_eq!(
        script,
        "ModAPI.meta.title(\"Reference.MOD_ID\");\nModAPI.meta.version(\"Reference.VERSION\");"
    );
}

#[test]
fn test_no_mod_annotation_no_metadata() {
    let source = r#"
        public class Plain {
            @SubscribeEvent
            public void onChat(ClientChatReceivedEvent event) {
                event.setCanceled(true);
            }
        }
    "#;
    let script = Converter::new().convert(source).unwrap();

    assert!(!script.contains("ModAPI.meta."));
    assert!(script.starts_with("ModAPI.addEventListener('receivechatmessage', (event) => {"));
    assert!(script.contains("event.preventDefault = true;"));
}

#[test]
fn test_unparseable_source_produces_no_output() {
    let result = Converter::new().convert("@Mod(modid = \"x\") public class {{ void }");
    assert!(matches!(result, Err(ConvertError::Parse(_))));
}

#[test]
fn test_repeated_conversion_unions_modules() {
    let mut converter = Converter::new();
    let settings = "class A { Object s = mc.gameSettings; }";
    let network = "class B { Object n = mc.getNetHandler(); }";

    assert_eq!(converter.convert(settings).unwrap(), "ModAPI.require('settings');");
    assert_eq!(
        converter.convert(network).unwrap(),
        "ModAPI.require('network');\nModAPI.require('settings');"
    );
}

#[test]
fn test_unknown_event_becomes_custom_listener() {
    let source = r#"
        class A {
            @SubscribeEvent
            public void on(SomethingOddHappened event) {}
        }
    "#;
    let report = Converter::new().analyze(source).unwrap();
    assert_eq!(
        report.handlers[0].category,
        EventCategory::Custom("somethingoddhappened".to_string())
    );
    assert!(report
        .script
        .starts_with("ModAPI.addEventListener('custom:somethingoddhappened', (event) => {"));
}

#[test]
fn test_overlay_tables_drive_conversion() {
    let overlay = TableOverlay::from_toml_str(
        r#"
        [[classes]]
        from = "Helpers.self()"
        to = "ModAPI.player"

        [[events]]
        name = "SomethingOddHappened"
        category = "frame"

        [[modules]]
        module = "player"
        triggers = ["Helpers.self()"]
        "#,
    )
    .unwrap();
    let tables = MappingTables::builtin().with_overlay(overlay).unwrap();

    let source = r#"
        class A {
            @SubscribeEvent
            public void on(SomethingOddHappened event) {
                Helpers.self().jump();
            }
        }
    "#;
    let script = Converter::with_tables(&tables).convert(source).unwrap();

    assert!(script.starts_with("ModAPI.require('player');"));
    assert!(script.contains("ModAPI.addEventListener('frame', (event) => {"));
    assert!(script.contains("ModAPI.player.jump();"));
}

#[test]
fn test_converted_output_is_stable_under_formatting() {
    let script = Converter::new().convert(&fixture("CombatHelper.java")).unwrap();
    assert_eq!(format_script(&script), script);
}

#[test]
fn test_batch_conversion_of_fixtures() {
    let files = vec![get_test_fixtures_dir().join("CombatHelper.java")];
    let results = convert_files_parallel(&files, MappingTables::builtin(), Some(2));

    assert_eq!(results.len(), 1);
    assert!(results[0].path.ends_with("CombatHelper.java"));
    let report = results[0].result.as_ref().unwrap();
    assert_eq!(report.metadata.id.as_deref(), Some("combathelper"));
}
