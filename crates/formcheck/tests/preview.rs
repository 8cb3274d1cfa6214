//! Tests for image preview loading through the form.

mod common;
use common::*;

use formcheck::fields::{self, registration_fields};
use formcheck::preview::PreviewLoader;
use formcheck::{FileUpload, Form, Trigger};

fn write_gif(dir: &tempfile::TempDir, name: &str) -> FileUpload {
    write_file(dir, name, b"GIF89a")
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> FileUpload {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    FileUpload::new(name, "image/gif", contents.len() as u64).path(path)
}

#[tokio::test]
async fn valid_upload_loads_preview_after_result() {
    let dir = tempfile::tempdir().unwrap();
    let (loader, mut rx) = PreviewLoader::channel();
    let mut form = Form::new(registration_fields(&config())).with_previews(loader);

    let result = form
        .handle_event(fields::PROFILE_PICTURE, Trigger::Change, write_gif(&dir, "a.gif"))
        .unwrap()
        .unwrap();
    assert!(result.is_valid());
    assert_eq!(form.state(fields::PROFILE_PICTURE).unwrap().preview(), None);

    let preview = rx.recv().await.unwrap();
    assert!(form.apply_preview(preview));
    assert_eq!(
        form.state(fields::PROFILE_PICTURE).unwrap().preview(),
        Some("data:image/gif;base64,R0lGODlh")
    );
}

#[tokio::test]
async fn superseded_preview_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let (loader, mut rx) = PreviewLoader::channel();
    let mut form = Form::new(registration_fields(&config())).with_previews(loader);

    form.handle_event(fields::PROFILE_PICTURE, Trigger::Change, write_gif(&dir, "a.gif"))
        .unwrap();
    form.handle_event(fields::PROFILE_PICTURE, Trigger::Change, write_gif(&dir, "b.gif"))
        .unwrap();

    let mut applied = 0;
    for _ in 0..2 {
        let preview = rx.recv().await.unwrap();
        if form.apply_preview(preview) {
            applied += 1;
        }
    }
    assert_eq!(applied, 1);
}

#[tokio::test]
async fn failed_validation_discards_pending_preview() {
    let dir = tempfile::tempdir().unwrap();
    let (loader, mut rx) = PreviewLoader::channel();
    let mut form = Form::new(registration_fields(&config())).with_previews(loader);

    form.handle_event(fields::PROFILE_PICTURE, Trigger::Change, write_gif(&dir, "a.gif"))
        .unwrap();
    let too_big = FileUpload::new("huge.png", "image/png", 5_000_000);
    form.handle_event(fields::PROFILE_PICTURE, Trigger::Change, too_big)
        .unwrap();

    let preview = rx.recv().await.unwrap();
    assert!(!form.apply_preview(preview));
    assert_eq!(form.state(fields::PROFILE_PICTURE).unwrap().preview(), None);
}

#[tokio::test]
async fn preview_from_before_reset_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let (loader, mut rx) = PreviewLoader::channel();
    let mut form = Form::new(registration_fields(&config())).with_previews(loader);

    form.handle_event(
        fields::PROFILE_PICTURE,
        Trigger::Change,
        write_file(&dir, "a.gif", b"AAAAAA"),
    )
    .unwrap();
    let before_reset = rx.recv().await.unwrap();

    form.reset();
    form.handle_event(
        fields::PROFILE_PICTURE,
        Trigger::Change,
        write_file(&dir, "b.gif", b"BBBBBB"),
    )
    .unwrap();
    let after_reset = rx.recv().await.unwrap();

    assert_ne!(before_reset.generation, after_reset.generation);
    assert!(!form.apply_preview(before_reset));
    assert_eq!(form.state(fields::PROFILE_PICTURE).unwrap().preview(), None);

    assert!(form.apply_preview(after_reset));
    assert_eq!(
        form.state(fields::PROFILE_PICTURE).unwrap().preview(),
        Some("data:image/gif;base64,QkJCQkJC")
    );
}

#[test]
fn without_runtime_validation_still_passes() {
    let dir = tempfile::tempdir().unwrap();
    let (loader, _rx) = PreviewLoader::channel();
    let mut form = Form::new(registration_fields(&config())).with_previews(loader);

    let result = form
        .handle_event(fields::PROFILE_PICTURE, Trigger::Change, write_gif(&dir, "a.gif"))
        .unwrap()
        .unwrap();
    assert!(result.is_valid());
}
