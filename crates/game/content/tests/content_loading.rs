use std::path::PathBuf;

use dungeon_content::{
    ClassPath, ContentError, ContentLoader, ContentManifest, CreatureTemplate, DirectorySource,
    ItemTemplate, LoadReport, ManifestLoader, MemorySource, SourceSpec, TemplateKinds,
    TemplateRegistry, TerrainTemplate,
};
use dungeon_core::{ErrorCategory, TerrainKind, Tile};
use serde_json::json;

const CLASSES: &str = r#"{
    "classes": [
        { "name": "Weapons", "sub_classes": [ { "name": "Swords" }, { "name": "Axes" } ] },
        { "name": "Armor" }
    ]
}"#;

const SWORDS: &str = r#"{
    "templates": [
        { "name": "Weapons", "type": "class", "members": [
            { "name": "Swords", "type": "class", "members": [
                { "name": "longsword", "type": "template", "weight": 4 }
            ] }
        ] }
    ]
}"#;

fn bundled_content() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../content")
}

fn load(
    source: &MemorySource,
    manifest: &ContentManifest,
) -> (ContentLoader, TemplateRegistry, LoadReport) {
    let mut loader = ContentLoader::new(TemplateKinds::with_builtin());
    let (registry, report) = loader.load_content(source, manifest);
    (loader, registry, report)
}

#[test]
fn class_tree_mirrors_nested_description() {
    let mut loader = ContentLoader::default();
    let document = json!({
        "classes": [
            {"name": "A"},
            {"name": "B", "sub_classes": [{"name": "B1"}]}
        ]
    });

    let step = loader.load_class_tree(&document, "classes.json");
    assert!(step.diagnostics.is_empty());

    let root = loader.class_tree().unwrap();
    let a = root.get_child("A").unwrap();
    assert!(!a.has_children());
    assert!(root.get_child("B").and_then(|b| b.get_child("B1")).is_some());
    assert!(root.get_child("C").is_none());
}

#[test]
fn starting_path_selects_matching_class() {
    let source = MemorySource::new()
        .with_document("classes.json", CLASSES)
        .with_document("swords.json", SWORDS);
    let manifest = ContentManifest::default()
        .with_source(SourceSpec::new("swords.json", "item").at(["Weapons", "Swords"]));

    let (_, registry, report) = load(&source, &manifest);

    assert!(report.is_clean(), "{:?}", report.diagnostics);
    let swords = ClassPath::from(["Weapons", "Swords"]);
    assert_eq!(registry.get(&swords).len(), 1);
    assert_eq!(registry.len(), 1);
    let longsword = registry
        .get_as::<ItemTemplate>(&swords)
        .next()
        .unwrap();
    assert_eq!(longsword.name, "longsword");
    assert_eq!(longsword.weight, 4);
}

#[test]
fn unmatched_starting_path_loads_nothing_and_reports() {
    let source = MemorySource::new()
        .with_document("classes.json", CLASSES)
        .with_document("swords.json", SWORDS);
    let manifest = ContentManifest::default()
        .with_source(SourceSpec::new("swords.json", "item").at(["Weapons", "Axes"]));

    let (_, registry, report) = load(&source, &manifest);

    assert!(registry.is_empty());
    assert_eq!(report.templates_loaded, 0);
    assert_eq!(report.count(ErrorCategory::PathResolution), 1);
    assert!(matches!(
        &report.diagnostics[0].error,
        ContentError::UnresolvedPath(path) if *path == ClassPath::from(["Weapons", "Axes"])
    ));
}

#[test]
fn entry_missing_type_does_not_block_siblings() {
    let source = MemorySource::new()
        .with_document("classes.json", r#"{"classes": [{"name": "Loot"}]}"#)
        .with_document(
            "loot.json",
            r#"{"templates": [
                {"name": "Loot", "type": "class", "members": [
                    {"name": "mystery"},
                    {"name": "coin", "type": "template", "stackable": true},
                    {"name": "gem", "type": "template", "value": 50}
                ]}
            ]}"#,
        );
    let manifest = ContentManifest::default().with_source(SourceSpec::new("loot.json", "item"));

    let (_, registry, report) = load(&source, &manifest);

    let loot = ClassPath::from(["Loot"]);
    let names: Vec<&str> = registry.get(&loot).iter().map(|t| t.name()).collect();
    assert_eq!(names, ["coin", "gem"]);
    assert_eq!(report.count(ErrorCategory::ContentMalformed), 1);
    assert_eq!(report.diagnostics[0].location, "Loot[0]");
}

#[test]
fn documents_contributing_to_one_path_accumulate() {
    let extra = r#"{"templates": [
        {"name": "broadsword", "type": "template"}
    ]}"#;
    let source = MemorySource::new()
        .with_document("classes.json", CLASSES)
        .with_document("swords.json", SWORDS)
        .with_document("more_swords.json", extra);
    let manifest = ContentManifest::default()
        .with_source(SourceSpec::new("swords.json", "item"))
        .with_source(SourceSpec::new("more_swords.json", "item").at(Vec::<String>::new()))
        .with_source(SourceSpec::new("more_swords.json", "item"));

    let (_, registry, report) = load(&source, &manifest);

    assert_eq!(registry.get(&ClassPath::from(["Weapons", "Swords"])).len(), 1);
    // Root-level templates land on the root path, which the class tree declares.
    assert_eq!(registry.get(&ClassPath::root()).len(), 2);
    assert!(report.is_clean(), "{:?}", report.diagnostics);
}

#[test]
fn missing_and_malformed_documents_are_skipped() {
    let source = MemorySource::new()
        .with_document("classes.json", CLASSES)
        .with_document("swords.json", SWORDS)
        .with_document("broken.json", "{ \"templates\": [")
        .with_document("wrong_shape.json", r#"{"items": []}"#);
    let manifest = ContentManifest::default()
        .with_source(SourceSpec::new("absent.json", "item"))
        .with_source(SourceSpec::new("broken.json", "item"))
        .with_source(SourceSpec::new("wrong_shape.json", "item"))
        .with_source(SourceSpec::new("swords.json", "spell"))
        .with_source(SourceSpec::new("swords.json", "item"));

    let (_, registry, report) = load(&source, &manifest);

    assert_eq!(registry.len(), 1);
    assert_eq!(report.documents_read, 3);
    assert_eq!(report.count(ErrorCategory::ContentNotFound), 1);
    assert_eq!(report.count(ErrorCategory::ContentMalformed), 3);
    let documents: Vec<&str> = report
        .diagnostics
        .iter()
        .map(|d| d.document.as_str())
        .collect();
    assert_eq!(
        documents,
        ["absent.json", "broken.json", "wrong_shape.json", "swords.json"]
    );
}

#[test]
fn missing_class_document_still_loads_templates() {
    let source = MemorySource::new().with_document("swords.json", SWORDS);
    let manifest = ContentManifest::default().with_source(SourceSpec::new("swords.json", "item"));

    let (loader, registry, report) = load(&source, &manifest);

    assert!(!loader.is_populated());
    assert_eq!(registry.len(), 1);
    assert_eq!(report.count(ErrorCategory::ContentNotFound), 1);
}

#[test]
fn unreadable_document_is_malformed_not_missing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("classes.json"), CLASSES).unwrap();
    std::fs::write(dir.path().join("items.json"), b"\xff\xfe").unwrap();
    let source = DirectorySource::new(dir.path());
    let manifest = ContentManifest::default().with_source(SourceSpec::new("items.json", "item"));

    let mut loader = ContentLoader::default();
    let (registry, report) = loader.load_content(&source, &manifest);

    assert!(registry.is_empty());
    assert_eq!(report.count(ErrorCategory::ContentNotFound), 0);
    assert_eq!(report.count(ErrorCategory::ContentMalformed), 1);
    assert!(matches!(
        &report.diagnostics[..],
        [diagnostic] if matches!(diagnostic.error, ContentError::Unreadable { .. })
    ));
}

#[test]
fn templates_outside_class_tree_are_flagged() {
    let source = MemorySource::new()
        .with_document("classes.json", r#"{"classes": [{"name": "Armor"}]}"#)
        .with_document("swords.json", SWORDS);
    let manifest = ContentManifest::default().with_source(SourceSpec::new("swords.json", "item"));

    let (_, registry, report) = load(&source, &manifest);

    assert_eq!(registry.len(), 1);
    assert!(matches!(
        &report.diagnostics[..],
        [diagnostic] if matches!(diagnostic.error, ContentError::UndeclaredClass(_))
    ));
}

#[test]
fn reload_rebuilds_from_scratch() {
    let mut source = MemorySource::new()
        .with_document("classes.json", CLASSES)
        .with_document("swords.json", SWORDS);
    let manifest = ContentManifest::default().with_source(SourceSpec::new("swords.json", "item"));
    let mut loader = ContentLoader::default();

    let (first, _) = loader.load_content(&source, &manifest);
    assert_eq!(first.len(), 1);

    source.insert("classes.json", r#"{"classes": [{"name": "Armor"}]}"#);
    source.remove("swords.json");
    let (second, report) = loader.load_content(&source, &manifest);

    assert!(second.is_empty());
    let tree = loader.class_tree().unwrap();
    assert!(tree.get_child("Weapons").is_none());
    assert!(tree.get_child("Armor").is_some());
    assert_eq!(report.count(ErrorCategory::ContentNotFound), 1);
}

#[test]
fn bundled_content_loads_cleanly() {
    let source = DirectorySource::new(bundled_content());
    let mut loader = ContentLoader::default();
    let manifest = loader.load_manifest(&source, "manifest.toml").unwrap();

    let (registry, report) = loader.load_content(&source, &manifest);

    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(report.documents_read, 5);
    assert_eq!(report.classes_loaded, 11);
    assert_eq!(report.templates_loaded, registry.len());

    let goblin = registry
        .find(&ClassPath::from(["Creatures", "Greenskins"]), "goblin")
        .and_then(|t| t.downcast_ref::<CreatureTemplate>())
        .unwrap();
    assert_eq!(goblin.max_hp, 7);

    assert!(
        registry
            .find(&ClassPath::from(["Items", "Weapons", "Swords"]), "longsword")
            .is_some()
    );
}

#[test]
fn terrain_template_builds_a_tile() {
    let source = DirectorySource::new(bundled_content());
    let manifest = ManifestLoader::load(&source, "manifest.toml").unwrap();
    let (registry, _) = ContentLoader::default().load_content(&source, &manifest);

    let ford = registry
        .get_as::<TerrainTemplate>(&ClassPath::from(["Terrain"]))
        .find(|t| t.name == "ford")
        .unwrap();
    assert_eq!(ford.kind, TerrainKind::ShallowWater);

    let tile = Tile::new(Box::new(ford.build()), 10, 10).unwrap();
    assert!(tile.is_passable());
    assert!(tile.terrain().is_transparent());
}
