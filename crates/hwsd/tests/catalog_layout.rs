//! Writing and re-reading the on-disk catalog.

use std::fs;

use stac_types::rel;

use hwsd::layout::{item_path, COLLECTION_FILE};
use hwsd::{
    create_collection, create_item, discover_assets, ensure_valid_collection, ensure_valid_item,
    read_collection, read_item, save_collection, save_item, HwsdError,
};
use test_utils::{temp_test_dir, write_fake_raster, write_fake_rasters, SAMPLE_VARIABLES};

#[tokio::test]
async fn test_save_collection_writes_documented_tree() {
    let source = temp_test_dir();
    let dest = temp_test_dir();
    let rasters = write_fake_rasters(source.path(), SAMPLE_VARIABLES);

    let mut items = Vec::new();
    for path in &rasters {
        items.push(create_item(path.to_str().unwrap(), None).await.unwrap());
    }
    let written = save_collection(&create_collection(), &items, dest.path()).unwrap();

    assert_eq!(written.len(), SAMPLE_VARIABLES.len() + 1);
    assert_eq!(written[0], dest.path().join(COLLECTION_FILE));
    for name in SAMPLE_VARIABLES {
        assert!(dest.path().join(item_path(name)).is_file(), "{}", name);
    }

    let collection = read_collection(&dest.path().join(COLLECTION_FILE)).unwrap();
    assert_eq!(collection.links_with_rel(rel::ROOT).next().unwrap().href, "./collection.json");
    assert_eq!(collection.links_with_rel(rel::SELF).next().unwrap().href, "./collection.json");
    let item_links: Vec<_> = collection
        .links_with_rel(rel::ITEM)
        .map(|l| l.href.as_str())
        .collect();
    assert_eq!(item_links.len(), SAMPLE_VARIABLES.len());
    assert!(item_links.contains(&"./T_SAND/T_SAND.json"));
    assert_eq!(collection.links_with_rel(rel::VIA).count(), 3);
    ensure_valid_collection(&collection).unwrap();

    let item = read_item(&dest.path().join(item_path("T_SAND"))).unwrap();
    assert_eq!(item.collection.as_deref(), Some("hwsd"));
    for rel_type in [rel::ROOT, rel::PARENT, rel::COLLECTION] {
        let link = item.links_with_rel(rel_type).next().unwrap();
        assert_eq!(link.href, "../collection.json");
    }
    ensure_valid_item(&item).unwrap();
}

#[tokio::test]
async fn test_saving_twice_does_not_duplicate_links() {
    let dest = temp_test_dir();
    let item = create_item("ISSOIL.tif", None).await.unwrap();

    save_collection(&create_collection(), &[item], dest.path()).unwrap();
    let first = read_collection(&dest.path().join(COLLECTION_FILE)).unwrap();
    let reread = read_item(&dest.path().join(item_path("ISSOIL"))).unwrap();

    save_collection(&first, &[reread], dest.path()).unwrap();
    let second = read_collection(&dest.path().join(COLLECTION_FILE)).unwrap();
    assert_eq!(first.links, second.links);

    let item = read_item(&dest.path().join(item_path("ISSOIL"))).unwrap();
    assert_eq!(item.links_with_rel(rel::PARENT).count(), 1);
}

#[test]
fn test_save_collection_requires_destination() {
    let dest = temp_test_dir();
    let missing = dest.path().join("not-created");

    let result = save_collection(&create_collection(), &[], &missing);
    assert!(matches!(result, Err(HwsdError::OutputPathMissing(p)) if p == missing));
}

#[tokio::test]
async fn test_save_item_round_trips() {
    let dest = temp_test_dir();
    let item = create_item("ROOTS.tif", None).await.unwrap();
    let path = dest.path().join("roots.json");

    save_item(&item, &path).unwrap();
    let reread = read_item(&path).unwrap();
    assert_eq!(reread, item);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"label:properties\": null"));
}

#[test]
fn test_discover_assets_in_catalog_order() {
    let dir = temp_test_dir();
    write_fake_raster(dir.path(), "T_SAND", 10);
    write_fake_raster(dir.path(), "AWC_CLASS", 10);
    write_fake_raster(dir.path(), "AWT_T_SOC", 10);
    write_fake_raster(dir.path(), "HWSD_SOIL_CLM_RES", 10);
    fs::write(dir.path().join("T_CLAY.nc4"), b"").unwrap();
    fs::create_dir(dir.path().join("S_OC.tif")).unwrap();

    let found = discover_assets(dir.path()).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_stem().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["AWC_CLASS", "T_SAND", "AWT_T_SOC"]);
}

#[test]
fn test_invalid_record_is_reported() {
    let mut collection = create_collection();
    collection.license.clear();
    collection.stac_extensions.clear();

    match ensure_valid_collection(&collection) {
        Err(HwsdError::Validation { record, issues }) => {
            assert_eq!(record, "hwsd");
            assert!(issues.iter().any(|i| i.message.contains("license")));
            assert!(issues.iter().any(|i| i.message.contains("stac_extensions")));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}
