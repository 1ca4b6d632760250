use flow_demos::resources::{
    assets_dir, load_binary,
    mesh::{load_obj, load_obj_or_sphere},
};

#[test]
fn should_find_bundled_assets() {
    let dir = assets_dir();

    assert!(dir.join("images/check.bmp").is_file(), "{}", dir.display());
    assert!(dir.join("models/sphere.obj").is_file(), "{}", dir.display());
}

#[tokio::test]
async fn should_load_sphere_model_with_unit_normals() {
    let mesh = load_obj("models/sphere.obj").await.unwrap();

    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(
        mesh.indices
            .iter()
            .all(|i| (*i as usize) < mesh.vertices.len())
    );
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.normal;
        assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-3);
    }
}

#[tokio::test]
async fn should_report_missing_files() {
    let error = load_binary("images/missing.bmp").await.unwrap_err();

    assert!(format!("{error:#}").contains("missing.bmp"));
    assert!(load_obj("models/missing.obj").await.is_err());
}

#[tokio::test]
async fn should_fall_back_to_generated_sphere() {
    let mesh = load_obj_or_sphere("models/missing.obj").await;

    assert!(!mesh.vertices.is_empty());
    assert!(!mesh.indices.is_empty());
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-4);
    }
}

#[tokio::test]
async fn should_decode_checker_image() {
    let bytes = load_binary("images/check.bmp").await.unwrap();
    let image = image::load_from_memory(&bytes).unwrap();

    assert!(image.width() > 0 && image.height() > 0);
}
