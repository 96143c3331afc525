use golfghost_core::{
    Course, CourseInput, CourseStore, GenerateError, GhostGolfer, JsonFileStore, RoundRngs,
    ValidationError, generate, strokes_received,
};

fn baytree_blue() -> Course {
    let input = CourseInput {
        tee_name: Some("Blue".to_string()),
        course_rating: Some(69.7),
        slope_rating: Some(126),
        par_values: Some(vec![4, 3, 4, 3, 5, 4, 4, 5, 4, 4, 4, 3, 5, 4, 4, 5, 3, 4]),
        hole_handicaps: Some(vec![3, 17, 15, 7, 9, 11, 1, 13, 5, 4, 14, 18, 8, 12, 6, 10, 16, 2]),
        yardages: Some(vec![
            349, 154, 308, 177, 488, 313, 365, 471, 352, 354, 313, 142, 520, 320, 374, 478, 148,
            338,
        ]),
    };
    Course::from_input(&input).unwrap()
}

fn flat_course(slope_rating: i32) -> Course {
    let input = CourseInput {
        tee_name: Some("White".to_string()),
        course_rating: Some(72.0),
        slope_rating: Some(slope_rating),
        par_values: Some(vec![4; 18]),
        hole_handicaps: Some((1..=18).collect()),
        yardages: Some(vec![360; 18]),
    };
    Course::from_input(&input).unwrap()
}

#[test]
fn every_generated_hole_satisfies_the_score_bounds() {
    let course = baytree_blue();
    for seed in 0..200u64 {
        for &index in &[0.0, 4.8, 9.4, 18.0, 25.0, 36.1, 54.0] {
            let rngs = RoundRngs::from_user_seed(seed);
            let scores = generate(index, &course, &rngs).unwrap();
            assert_eq!(scores.len(), 18);
            for score in &scores {
                assert!(
                    score.gross_score >= score.par - 1,
                    "seed {seed} index {index}: gross below par-1"
                );
                assert!(
                    score.gross_score <= score.par + 6,
                    "seed {seed} index {index}: gross above par+6"
                );
                assert_eq!(score.net_score, score.gross_score - score.strokes_received);
                assert!((0..=2).contains(&score.strokes_received));
            }
        }
    }
}

#[test]
fn second_strokes_only_appear_past_eighteen() {
    let course = baytree_blue();
    for seed in 0..50u64 {
        let rngs = RoundRngs::from_user_seed(seed);
        let golfer = GhostGolfer::new(12.0, &course).unwrap();
        assert!(golfer.course_handicap() <= 18);
        let scores = golfer.generate_round(&rngs);
        assert!(scores.iter().all(|s| s.strokes_received <= 1));
    }
}

#[test]
fn stroke_allocation_is_independent_of_the_seed() {
    let course = baytree_blue();
    let golfer = GhostGolfer::new(25.0, &course).unwrap();
    let expected: Vec<i32> = course
        .hole_handicaps
        .iter()
        .map(|&ranking| strokes_received(golfer.course_handicap(), ranking))
        .collect();

    for seed in [1u64, 99, 0xDEAD] {
        let scores = golfer.generate_round(&RoundRngs::from_user_seed(seed));
        let received: Vec<i32> = scores.iter().map(|s| s.strokes_received).collect();
        assert_eq!(received, expected);
    }
}

#[test]
fn eighteen_index_on_neutral_slope_gets_exactly_one_stroke_per_hole() {
    let course = flat_course(113);
    let golfer = GhostGolfer::new(18.0, &course).unwrap();
    assert_eq!(golfer.course_handicap(), 18);

    let scores = golfer.generate_round(&RoundRngs::from_user_seed(42));
    assert!(scores.iter().all(|s| s.strokes_received == 1));
    let total: i32 = scores.iter().map(|s| s.strokes_received).sum();
    assert_eq!(total, 18);
}

#[test]
fn twenty_five_index_on_neutral_slope_doubles_the_seven_hardest() {
    let course = flat_course(113);
    let golfer = GhostGolfer::new(25.0, &course).unwrap();
    assert_eq!(golfer.course_handicap(), 25);

    let scores = golfer.generate_round(&RoundRngs::from_user_seed(42));
    for score in &scores {
        // Rankings on this course equal hole numbers.
        let ranking = i32::from(score.hole);
        let expected = if ranking <= 7 { 2 } else { 1 };
        assert_eq!(score.strokes_received, expected, "hole {}", score.hole);
    }
    let total: i32 = scores.iter().map(|s| s.strokes_received).sum();
    assert_eq!(total, 25);
}

#[test]
fn non_permutation_rankings_are_accepted() {
    // Difficulty rankings are permutation-like but not required to be one.
    let input = CourseInput {
        tee_name: Some("Gold".to_string()),
        course_rating: Some(71.0),
        slope_rating: Some(120),
        par_values: Some(vec![4; 18]),
        hole_handicaps: Some(vec![1; 18]),
        yardages: Some(vec![400; 18]),
    };
    let course = Course::from_input(&input).unwrap();
    let scores = generate(10.0, &course, &RoundRngs::from_user_seed(3)).unwrap();
    // Every hole ranks hardest, so every hole receives a stroke.
    assert!(scores.iter().all(|s| s.strokes_received == 1));
}

#[test]
fn identical_seeds_reproduce_identical_scorecards() {
    let course = baytree_blue();
    let first = generate(14.2, &course, &RoundRngs::from_user_seed(1234)).unwrap();
    let second = generate(14.2, &course, &RoundRngs::from_user_seed(1234)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn out_of_domain_index_never_yields_a_partial_scorecard() {
    let course = baytree_blue();
    let rngs = RoundRngs::from_user_seed(9);
    assert!(matches!(
        generate(f64::NAN, &course, &rngs),
        Err(GenerateError::NonFiniteHandicap)
    ));
    assert!(matches!(
        generate(99.0, &course, &rngs),
        Err(GenerateError::HandicapOutOfRange { .. })
    ));
    // Rejection happens before any draw is consumed.
    assert_eq!(rngs.round().draws(), 0);
    assert_eq!(rngs.hole().draws(), 0);
}

#[test]
fn store_validate_names_the_missing_field() {
    let mut input = baytree_blue().to_input();
    input.yardages = None;
    let err = CourseStore::<JsonFileStore>::validate(&input).unwrap_err();
    assert_eq!(err, ValidationError::MissingField { field: "yardages" });
    assert!(err.to_string().contains("yardages"));
}
