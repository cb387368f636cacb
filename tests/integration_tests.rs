use region_table::columns::{self, ColumnId};
use region_table::prelude::*;

fn regions() -> Vec<Region> {
    vec![
        Region::new("North", 100, 80).with_percentage(25.0),
        Region::new("South", 50, 60).with_percentage(-16.7),
        Region::new("East", 100, 50).with_percentage(100.0),
    ]
}

fn labels() -> StaticLabels {
    [
        ("REGIONS_North", "regions.north"),
        ("REGIONS_South", "regions.south"),
        ("REGIONS_East", "regions.east"),
    ]
    .into_iter()
    .collect()
}

fn names<'a>(sorted: &[&'a Region]) -> Vec<&'a str> {
    sorted.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_default_order_end_to_end() {
    let input = regions();
    let (rows, effective) = compute_view_model(&input, &SortState::empty(), &labels());

    assert_eq!(effective, SortState::default());

    let order: Vec<&str> = rows.iter().map(|r| r.text(ColumnId::Name).unwrap()).collect();
    assert_eq!(order, vec!["regions.east", "regions.north", "regions.south"]);

    let diffs: Vec<&str> = rows
        .iter()
        .map(|r| r.text(ColumnId::Difference).unwrap())
        .collect();
    assert_eq!(diffs, vec!["50", "20", "0"]);
}

#[test]
fn test_row_cells_follow_registry_order() {
    let input = regions();
    let (rows, _) = compute_view_model(&input, &SortState::default(), &labels());

    let ids: Vec<ColumnId> = rows[0].cells().iter().map(|c| c.column).collect();
    assert_eq!(
        ids,
        vec![
            ColumnId::Name,
            ColumnId::Actual,
            ColumnId::Difference,
            ColumnId::Percentage
        ]
    );

    // East
    assert_eq!(rows[0].text(ColumnId::Actual), Some("100"));
    assert_eq!(rows[0].text(ColumnId::Percentage), Some("+100%"));
    // South
    assert_eq!(rows[2].text(ColumnId::Percentage), Some("-16.7%"));
}

#[test]
fn test_clamp_difference() {
    let shrinking = Region::new("South", 50, 60);
    assert_eq!(shrinking.difference(), 0);

    let growing = Region::new("North", 100, 80);
    assert_eq!(growing.difference(), 20);

    let extreme = Region::new("Overflow", i64::MIN, i64::MAX);
    assert_eq!(extreme.difference(), 0);

    let negative = Region::new("Broken", -5, -10);
    assert_eq!(negative.difference(), 5);
}

#[test]
fn test_empty_state_is_identity() {
    let input = regions();
    let indices = sort_indices(&input, &SortState::empty());
    assert_eq!(indices, vec![0, 1, 2]);

    let again = sort_indices(&input, &SortState::empty());
    assert_eq!(indices, again);
}

#[test]
fn test_default_tie_break_by_actual_then_input_order() {
    let input = vec![
        Region::new("A", 10, 10), // diff 0, actual 10
        Region::new("B", 30, 30), // diff 0, actual 30
        Region::new("C", 30, 40), // diff 0 (clamped), actual 30
        Region::new("D", 12, 7),  // diff 5
    ];

    let sorted = sort(&input, &SortState::default());
    assert_eq!(names(&sorted), vec!["D", "B", "C", "A"]);
}

#[test]
fn test_ascending_and_descending_single_key() {
    let input = regions();

    let asc = SortState::new([SortDescriptor::asc(ColumnId::Percentage)]).unwrap();
    assert_eq!(names(&sort(&input, &asc)), vec!["South", "North", "East"]);

    let desc = SortState::new([SortDescriptor::desc(ColumnId::Percentage)]).unwrap();
    assert_eq!(names(&sort(&input, &desc)), vec!["East", "North", "South"]);
}

#[test]
fn test_stable_on_equal_keys() {
    let input = vec![
        Region::new("first", 5, 0),
        Region::new("second", 5, 0),
        Region::new("third", 5, 0),
    ];
    let state = SortState::new([SortDescriptor::asc(ColumnId::Actual)]).unwrap();
    assert_eq!(names(&sort(&input, &state)), vec!["first", "second", "third"]);

    let state = SortState::new([SortDescriptor::desc(ColumnId::Actual)]).unwrap();
    assert_eq!(names(&sort(&input, &state)), vec!["first", "second", "third"]);
}

#[test]
fn test_sort_in_place() {
    let mut input = regions();
    sort_in_place(&mut input, &SortState::default());
    let order: Vec<&str> = input.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["East", "North", "South"]);
}

#[test]
fn test_nan_percentage_sorts_last_ascending() {
    let input = vec![
        Region::new("nan", 0, 0).with_percentage(f64::NAN),
        Region::new("low", 0, 0).with_percentage(-1.0),
        Region::new("high", 0, 0).with_percentage(3.5),
    ];
    let state = SortState::new([SortDescriptor::asc(ColumnId::Percentage)]).unwrap();
    assert_eq!(names(&sort(&input, &state)), vec!["low", "high", "nan"]);
}

#[test]
fn test_value_ordering() {
    use std::cmp::Ordering::{Equal, Greater, Less};

    let missing = Value::Missing;
    let int = Value::Integer(3);
    let num = Value::Number(2.5);
    let text = Value::Text("a".into());

    // Missing < numbers < text
    assert_eq!(missing.compare(&Value::Integer(-5)), Less);
    assert_eq!(missing.compare(&num), Less);
    assert_eq!(missing.compare(&text), Less);
    assert_eq!(int.compare(&text), Less);
    assert_eq!(num.compare(&text), Less);
    assert_eq!(text.compare(&missing), Greater);
    assert_eq!(text.compare(&int), Greater);
    assert_eq!(missing.compare(&Value::Missing), Equal);

    // Integers and floats compare numerically
    assert_eq!(int.compare(&num), Greater);
    assert_eq!(num.compare(&int), Less);
    assert_eq!(Value::Integer(2).compare(&Value::Number(2.0)), Equal);
    assert_eq!(Value::Integer(-1).compare(&Value::Integer(4)), Less);

    // Text is lexicographic
    assert_eq!(text.compare(&Value::Text("b".into())), Less);
    assert_eq!(Value::Text("B".into()).compare(&text), Less);

    // NaN after every number, equal to itself
    let nan = Value::Number(f64::NAN);
    assert_eq!(nan.compare(&Value::Number(f64::INFINITY)), Greater);
    assert_eq!(int.compare(&nan), Less);
    assert_eq!(nan.compare(&Value::Number(f64::NAN)), Equal);
    assert_eq!(nan.compare(&text), Less);

    assert_eq!(Value::Missing.to_string(), "");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
    assert_eq!(Value::Integer(-7).to_string(), "-7");
}

#[test]
fn test_percentage_formatting() {
    use region_table::view::format_percentage;

    assert_eq!(format_percentage(5.0), "+5%");
    assert_eq!(format_percentage(0.0), "0%");
    assert_eq!(format_percentage(-0.0), "0%");
    assert_eq!(format_percentage(-3.0), "-3%");
    assert_eq!(format_percentage(12.5), "+12.5%");
}

#[test]
fn test_unknown_column_lookup() {
    let err = columns::lookup("nonexistent").unwrap_err();
    assert_eq!(err, ConfigurationError::UnknownColumn("nonexistent".into()));
    assert_eq!(err.to_string(), "unknown column 'nonexistent'");
}

#[test]
fn test_registry_metadata() {
    let meta: Vec<(&str, bool, &str)> = columns::iter()
        .map(|c| (c.id.as_str(), c.sortable, c.label_key))
        .collect();
    assert_eq!(
        meta,
        vec![
            ("name", false, "REGIONS_NAME"),
            ("actual", true, "REGIONS_CASES"),
            ("difference", true, "REGIONS_DAILY_CASES"),
            ("percentage", true, "REGIONS_PERCENTAGE_CASES"),
        ]
    );

    let region = Region::new("North", 100, 80).with_percentage(25.0);
    assert_eq!(
        columns::lookup("difference").unwrap().value(&region),
        Value::Integer(20)
    );
    assert_eq!(
        columns::lookup("name").unwrap().value(&region),
        Value::Text("North".into())
    );
}

#[test]
fn test_missing_label_only_affects_its_row() {
    let input = vec![
        Region::new("East", 100, 50),
        Region::new("Unknown Land", 90, 50),
    ];
    let (rows, _) = compute_view_model(&input, &SortState::empty(), &labels());

    assert!(!rows[0].has_errors());
    assert_eq!(rows[0].text(ColumnId::Name), Some("regions.east"));

    let name = rows[1].cell(ColumnId::Name).unwrap();
    let err = name.text.as_ref().unwrap_err();
    assert_eq!(err.identifier(), "REGIONS_UnknownLand");
    assert_eq!(name.display(), "REGIONS_UnknownLand");
    assert_eq!(rows[1].text(ColumnId::Actual), Some("90"));
}

#[test]
fn test_name_normalization() {
    use region_table::labels::{normalize, region_identifier};

    assert_eq!(normalize("Ústí nad Labem"), "ÚstínadLabem");
    assert_eq!(normalize("Kraj Vysočina"), "KrajVysočina");
    assert_eq!(normalize("Moravian - Silesian\tRegion"), "MoravianSilesianRegion");
    assert_eq!(region_identifier("South Bohemian"), "REGIONS_SouthBohemian");
}

#[test]
fn test_labels_from_json() {
    let labels = StaticLabels::from_json(
        r#"{ "REGIONS_HlavníměstoPraha": "regions.prague", "REGIONS_NAME": "regions.name" }"#,
    )
    .unwrap();
    assert_eq!(labels.len(), 2);

    let input = vec![Region::new("Hlavní město Praha", 10, 5)];
    let (rows, _) = compute_view_model(&input, &SortState::empty(), &labels);
    assert_eq!(rows[0].text(ColumnId::Name), Some("regions.prague"));

    assert!(StaticLabels::from_json("[1, 2]").is_err());
}

#[test]
fn test_region_from_json() {
    let input: Vec<Region> = serde_json::from_str(
        r#"[
            { "name": "North", "actual": 100, "old": 80, "percentage": 25 },
            { "name": "South", "actual": 50, "old": 60 }
        ]"#,
    )
    .unwrap();

    assert_eq!(input[0].percentage, 25.0);
    assert_eq!(input[1].percentage, 0.0);
    assert_eq!(input[1].difference(), 0);
}

#[test]
fn test_empty_input() {
    let input: Vec<Region> = vec![];
    assert!(sort_indices(&input, &SortState::default()).is_empty());

    let (rows, _) = compute_view_model(&input, &SortState::default(), &labels());
    assert!(rows.is_empty());
}

#[test]
fn test_sort_references() {
    let owned = regions();
    let refs: Vec<&Region> = owned.iter().collect();
    let sorted = sort(&refs, &SortState::default());
    assert_eq!(names(&sorted), vec!["East", "North", "South"]);
}
