use chrono::{TimeZone, Utc};
use frequence_share::{
    decode_image_base64, ArtifactBuilder, ShareError, ShareRequest, DEFAULT_FILE_NAME,
    PNG_MEDIA_TYPE,
};

#[test]
fn builder_defaults_to_png_metadata() {
    let before = Utc::now();
    let artifact = ArtifactBuilder::new().with_bytes(vec![1u8, 2, 3]).build();
    let after = Utc::now();

    assert_eq!(artifact.file_name(), DEFAULT_FILE_NAME);
    assert_eq!(artifact.media_type(), PNG_MEDIA_TYPE);
    assert_eq!(artifact.bytes(), &[1u8, 2, 3]);
    assert_eq!(artifact.len(), 3);
    assert!(artifact.last_modified() >= before && artifact.last_modified() <= after);
    assert!(artifact.last_modified_millis() > 0);
}

#[test]
fn builder_honours_pinned_timestamp() {
    let pinned = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    let artifact = ArtifactBuilder::new()
        .with_file_name("scan.png")
        .with_media_type("image/x-test")
        .with_last_modified(pinned)
        .build();

    assert_eq!(artifact.file_name(), "scan.png");
    assert_eq!(artifact.media_type(), "image/x-test");
    assert_eq!(artifact.last_modified_millis(), 1_718_971_200_000);
    assert!(artifact.is_empty());
}

#[test]
fn decoded_bytes_survive_into_artifact() {
    let bytes = decode_image_base64("AAECAwT/").unwrap();
    let artifact = ArtifactBuilder::new().with_bytes(bytes).build();

    assert_eq!(artifact.into_bytes(), vec![0u8, 1, 2, 3, 4, 255]);
}

#[test]
fn decode_error_message_names_the_problem() {
    let err = decode_image_base64("abc$").unwrap_err();

    assert!(matches!(err, ShareError::Decode(_)));
    assert!(err.to_string().starts_with("Erreur: image base64 invalide ("));
}

#[test]
fn request_holds_exactly_one_file() {
    let artifact = ArtifactBuilder::new().with_bytes(b"png".to_vec()).build();
    let request = ShareRequest::single("Ma fréquence stationR", artifact.clone());

    assert_eq!(request.title(), "Ma fréquence stationR");
    assert_eq!(request.files(), &[artifact.clone()]);

    let (title, files) = request.into_parts();
    assert_eq!(title, "Ma fréquence stationR");
    assert_eq!(files, vec![artifact]);
}
