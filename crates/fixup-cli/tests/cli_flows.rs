//! Driver-level flows: flags, config files and printed output

use fixup_cli::{patch_cmd, resize_cmd};
use fixup_image::ResizeSpec;
use fixup_patch::recipes::{bet_buttons, spectator_sync};
use fixup_test_utils::{image_dimensions, table_workspace, write_jpeg, SOURCE_WITHOUT_ANCHORS, TABLE_SOURCE};
use pretty_assertions::assert_eq;

fn args_for(file: &std::path::Path) -> patch_cmd::PatchArgs {
    patch_cmd::PatchArgs {
        file: Some(file.to_path_buf()),
        ..Default::default()
    }
}

#[test]
fn bet_buttons_prints_success_and_steps() {
    let (_dir, file) = table_workspace(TABLE_SOURCE);
    let recipe = bet_buttons::recipe();
    let mut out = Vec::new();

    let report = patch_cmd::execute(&recipe, &args_for(&file), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Added spectator bet buttons and increased resolution time!\n\
         \x20 opponent-bet-buttons: applied\n\
         \x20 player-bet-buttons: applied\n\
         \x20 resolution-delay: applied (2 occurrences)\n"
    );
    assert!(report.written);
    assert!(std::fs::read_to_string(&file).unwrap().contains("}, 5000);"));
}

#[test]
fn missing_anchors_still_succeed_by_default() {
    let (_dir, file) = table_workspace(SOURCE_WITHOUT_ANCHORS);
    let mut out = Vec::new();

    let report = patch_cmd::execute(&bet_buttons::recipe(), &args_for(&file), &mut out).unwrap();

    assert_eq!(report.missing(), vec!["opponent-bet-buttons", "player-bet-buttons"]);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("opponent-bet-buttons: anchor missing"));
}

#[test]
fn strict_flag_fails_and_leaves_file() {
    let (_dir, file) = table_workspace(SOURCE_WITHOUT_ANCHORS);
    let args = patch_cmd::PatchArgs {
        strict: true,
        ..args_for(&file)
    };

    let err = patch_cmd::execute(&bet_buttons::recipe(), &args, &mut Vec::new()).unwrap_err();

    assert!(format!("{err:#}").contains("opponent-bet-buttons"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), SOURCE_WITHOUT_ANCHORS);
}

#[test]
fn strict_from_config_file() {
    let (dir, file) = table_workspace(SOURCE_WITHOUT_ANCHORS);
    let config = dir.path().join("fixup.toml");
    std::fs::write(
        &config,
        format!("[patch]\ntarget = {:?}\nstrict = true\n", file.display().to_string()),
    )
    .unwrap();
    let args = patch_cmd::PatchArgs {
        config: Some(config),
        ..Default::default()
    };

    assert!(patch_cmd::execute(&spectator_sync::recipe(), &args, &mut Vec::new()).is_err());
}

#[test]
fn missing_target_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = args_for(&dir.path().join("components").join("PokerBattleTable.tsx"));

    let err = patch_cmd::execute(&spectator_sync::recipe(), &args, &mut Vec::new()).unwrap_err();

    assert!(format!("{err:#}").contains("PokerBattleTable.tsx"));
}

#[test]
fn dry_run_json_reports_without_writing() {
    let (_dir, file) = table_workspace(TABLE_SOURCE);
    let args = patch_cmd::PatchArgs {
        dry_run: true,
        json: true,
        ..args_for(&file)
    };
    let mut out = Vec::new();

    patch_cmd::execute(&spectator_sync::recipe(), &args, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["recipe"], "spectator_sync");
    assert_eq!(value["written"], false);
    assert_eq!(value["steps"][0]["outcome"]["status"], "applied");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), TABLE_SOURCE);
}

#[test]
fn resize_narrates_success() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ResizeSpec::new().with_input(dir.path().join("screenshot.jpg"));
    write_jpeg(&spec.input, 900, 600);
    let mut out = Vec::new();

    assert!(resize_cmd::execute(&spec, false, &mut out).unwrap());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("   Dimensoes originais: 900x600\n"));
    assert!(text.contains("   Aspect ratio original: 1.50:1\n"));
    assert!(text.contains("   Novas dimensoes: 1200x800\n"));
    assert!(text.contains("   Aspect ratio: 3:2 (1.5:1)\n"));
    assert!(text.contains("git commit -m 'fix: resize screenshot to 3:2 aspect ratio'"));
    assert!(text.ends_with("✨ Sucesso! A imagem está pronta para o Farcaster!\n"));
    assert_eq!(image_dimensions(&spec.output), (1200, 800));
    assert_eq!(image_dimensions(&spec.backup), (900, 600));
}

#[test]
fn resize_reports_decode_failure_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ResizeSpec::new().with_input(dir.path().join("screenshot.jpg"));
    std::fs::write(&spec.input, b"plain text").unwrap();
    let mut out = Vec::new();

    assert!(!resize_cmd::execute(&spec, false, &mut out).unwrap());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("ERRO ao redimensionar: "));
    assert!(text.ends_with("💡 Consulte RESIZE-IMAGE-INSTRUCTIONS.md para alternativas\n"));
}
