use sarvam_tools::domain::{
    ASSET_DELIMITER, DigitizationJobId, DigitizedDocument, OutputFormat, merge_assets,
};

#[test]
fn given_two_assets_when_merging_then_joins_with_delimiter() {
    let merged = merge_assets(&["Hello", "World"]);

    assert_eq!(merged, "Hello\n\n---\n\nWorld");
    assert_eq!(merged.chars().count(), 17);
}

#[test]
fn given_single_asset_when_merging_then_returns_it_unchanged() {
    assert_eq!(merge_assets(&["only page"]), "only page");
}

#[test]
fn given_empty_first_asset_when_merging_then_delimiter_still_separates() {
    let merged = merge_assets(&["", "Second"]);

    assert_eq!(merged, format!("{}Second", ASSET_DELIMITER));
}

#[test]
fn given_multibyte_content_when_measuring_then_counts_characters() {
    let document = DigitizedDocument {
        job_id: DigitizationJobId::parse("job-1").unwrap(),
        job_state: "Completed".to_string(),
        output_format: OutputFormat::Markdown,
        content: "नमस्ते".to_string(),
    };

    assert_eq!(document.content_length(), "नमस्ते".chars().count());
    assert!(document.content_length() < document.content.len());
}
