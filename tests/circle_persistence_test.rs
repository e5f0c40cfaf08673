//! Persistence tests for the friend circle
//!
//! Exercises the text-file backend end to end: loading with bad lines,
//! full rewrites after each mutation, and out-of-bounds failures that must
//! leave the file untouched.

mod common;

use common::{open_circle, sample_line, uniform_scores, TestDataFile};
use friend_circle::{
    Category, Circle, CriteriaSet, Encoding, Gender, ListFilter, ScoreMap, TextFileStore,
};
use std::sync::Arc;

#[test]
fn test_malformed_line_between_valid_rows() {
    let good: Vec<String> = ["Ana", "Luis", "Eva", "Kim", "Teo"]
        .iter()
        .enumerate()
        .map(|(i, name)| sample_line(name, i as i32 + 1, 'F'))
        .collect();
    let mut lines: Vec<&str> = good.iter().map(String::as_str).collect();
    lines.insert(2, "Broken,1,2,three,4,5,6,7,8,9,10,M,Tertiary");
    let file = TestDataFile::with_lines(&lines);

    let circle = file.open();

    assert_eq!(circle.len(), 5);
    assert_eq!(circle.skipped_lines().len(), 1);
    assert_eq!(circle.skipped_lines()[0].line_number, 3);
}

#[test]
fn test_five_rows_with_one_bad_yields_four() {
    let a = sample_line("Ana", 9, 'F');
    let b = sample_line("Luis", 5, 'M');
    let c = sample_line("Eva", 2, 'F');
    let d = sample_line("Kim", 7, 'H');
    let file = TestDataFile::with_lines(&[&a, &b, "Bad,1,1,1", &c, &d]);

    let circle = file.open();

    assert_eq!(circle.len(), 4);
    assert_eq!(circle.skipped_lines().len(), 1);
    assert_eq!(circle.skipped_lines()[0].content, "Bad,1,1,1");
    assert_eq!(circle.get(3).unwrap().gender(), Gender::Male);
}

#[test]
fn test_missing_file_starts_empty_and_is_created_on_add() {
    let file = TestDataFile::new();
    let mut circle = file.open();
    assert!(circle.is_empty());
    assert!(!file.path.exists());

    let scores = uniform_scores(circle.criteria(), 4);
    circle.add("Ana", &scores, "F").unwrap();

    assert_eq!(file.contents(), "Ana,4,4,4,4,4,4,4,4,4,4,F,Tertiary\n");
}

#[test]
fn test_every_mutation_rewrites_the_file() {
    let file = TestDataFile::new();
    let mut circle = file.open();
    let criteria = Arc::clone(circle.criteria());

    circle.add("Ana", &uniform_scores(&criteria, 9), "F").unwrap();
    circle.add("Luis", &uniform_scores(&criteria, 3), "M").unwrap();
    assert_eq!(file.contents().lines().count(), 2);

    let update: ScoreMap = [("trust".to_string(), 10)].into_iter().collect();
    assert!(circle.update_at(0, &update, Some("Ana Maria"), None).unwrap());
    assert!(file.contents().starts_with("Ana Maria,9,10,9,"));
    assert!(file.contents().lines().next().unwrap().ends_with(",F,Super Friend"));

    circle.remove_at(1).unwrap().unwrap();
    assert_eq!(file.contents().lines().count(), 1);

    // A fresh load sees exactly what was written
    let reopened = file.open();
    assert_eq!(reopened.friends(), circle.friends());
}

#[test]
fn test_remove_out_of_bounds_leaves_file_unchanged() {
    let file = TestDataFile::new();
    let mut circle = file.open();
    assert!(circle.remove_at(0).unwrap().is_none());
    assert!(!file.path.exists());

    circle.add("Ana", &ScoreMap::new(), "F").unwrap();
    let before = file.contents();
    assert!(circle.remove_at(1).unwrap().is_none());
    assert!(circle.remove_at(usize::MAX).unwrap().is_none());
    assert_eq!(circle.len(), 1);
    assert_eq!(file.contents(), before);
}

#[test]
fn test_update_out_of_bounds_leaves_file_unchanged() {
    let line = sample_line("Ana", 5, 'F');
    let file = TestDataFile::with_lines(&[&line]);
    let before = file.contents();
    let mut circle = file.open();

    let update: ScoreMap = [("trust".to_string(), 10)].into_iter().collect();
    assert!(!circle.update_at(1, &update, Some("Zed"), Some("M")).unwrap());
    assert_eq!(file.contents(), before);
    assert_eq!(circle.get(0).unwrap().name(), "Ana");
}

#[test]
fn test_end_to_end_super_friend_promotion() {
    let file = TestDataFile::new();
    let mut circle = file.open();
    let criteria = Arc::clone(circle.criteria());

    let index = circle.add("Ana", &uniform_scores(&criteria, 9), "F").unwrap();
    let ana = circle.get(index).unwrap();
    assert_eq!(ana.total(), 90);
    assert_eq!(ana.category(), Category::Primary);

    let bump: ScoreMap = [("personal_growth".to_string(), 10)].into_iter().collect();
    circle.update_at(index, &bump, None, None).unwrap();
    let ana = circle.get(index).unwrap();
    assert_eq!(ana.total(), 91);
    assert_eq!(ana.category(), Category::SuperFriend);

    let reopened = file.open();
    assert_eq!(reopened.get(0).unwrap().category(), Category::SuperFriend);
}

#[test]
fn test_ranked_listing_is_stable_across_reload() {
    // totals 55, 80, 80, 10
    let mut mixed = vec!["5"; 9];
    mixed.push("10");
    let first = format!("Fifty-five,{},M,Unknown", mixed.join(","));
    let b = sample_line("Eighty A", 8, 'F');
    let c = sample_line("Eighty B", 8, 'M');
    let d = sample_line("Ten", 1, 'F');
    let file = TestDataFile::with_lines(&[&first, &b, &c, &d]);

    let circle = file.open();
    let totals: Vec<i64> = circle.list_sorted().into_iter().map(|f| f.total()).collect();
    assert_eq!(totals, [80, 80, 55, 10]);

    let names: Vec<&str> = circle.list_sorted().into_iter().map(|f| f.name()).collect();
    assert_eq!(names, ["Eighty A", "Eighty B", "Fifty-five", "Ten"]);

    let top: Vec<usize> = circle
        .list(&ListFilter::MinTotal(80))
        .into_iter()
        .map(|(i, _)| i)
        .collect();
    assert_eq!(top, [1, 2]);
}

#[test]
fn test_combined_gender_category_rows_are_rewritten_explicitly() {
    let file = TestDataFile::with_lines(&["Eva,2,2,2,2,2,2,2,2,2,2,FOccasional"]);
    let circle = file.open();
    assert_eq!(circle.len(), 1);

    circle.save().unwrap();
    assert_eq!(file.contents(), "Eva,2,2,2,2,2,2,2,2,2,2,F,Occasional\n");
}

#[test]
fn test_custom_criteria_collection() {
    let file = TestDataFile::new();
    let criteria = Arc::new(CriteriaSet::new(["loyalty", "humor", "honesty"]).unwrap());
    let mut circle = open_circle(&file.path, Arc::clone(&criteria));

    circle
        .add("Kim", &uniform_scores(&criteria, 10), "F")
        .unwrap();
    assert_eq!(file.contents(), "Kim,10,10,10,F,Occasional\n");

    // The same file read with the default ten criteria has the wrong field count
    let default_view = file.open();
    assert!(default_view.is_empty());
    assert_eq!(default_view.skipped_lines().len(), 1);
}

#[test]
fn test_non_utf8_line_is_skipped_not_fatal() {
    let file = TestDataFile::new();
    let mut bytes = sample_line("Ana", 9, 'F').into_bytes();
    bytes.extend_from_slice(b"\nJos");
    bytes.push(0xE9);
    bytes.extend_from_slice(b",5,5,5,5,5,5,5,5,5,5,M,Tertiary\n");
    bytes.extend_from_slice(sample_line("Luis", 3, 'M').as_bytes());
    bytes.push(b'\n');
    std::fs::write(&file.path, &bytes).unwrap();

    let circle = file.open();

    let names: Vec<&str> = circle.friends().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["Ana", "Luis"]);
    assert_eq!(circle.skipped_lines().len(), 1);
    assert_eq!(circle.skipped_lines()[0].line_number, 2);
}

#[test]
fn test_unencodable_add_leaves_circle_usable() {
    let file = TestDataFile::new();
    let store = TextFileStore::with_encoding(&file.path, Encoding::Latin1);
    let mut circle = Circle::open(store, CriteriaSet::shared_default()).unwrap();

    assert!(circle.add("Zoë ☺", &ScoreMap::new(), "F").is_err());
    assert!(circle.is_empty());
    assert!(!file.path.exists());

    circle.add("Zoë", &ScoreMap::new(), "F").unwrap();
    assert_eq!(circle.len(), 1);
    assert_eq!(std::fs::read(&file.path).unwrap()[2], 0xEB);
}
