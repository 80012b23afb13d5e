// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the pose classifier

use pose_classifier::batch::{classify_frames, summarize};
use pose_classifier::io::{Layout, parse_frames};
use pose_classifier::{
    ClassifierConfig, ClassifyError, Joint, Landmark, Landmarks, PoseClassifier, PoseLabel,
};

/// Shoulders at 0.3, hips at 0.6, knees at 0.8, arms hanging straight down.
fn relaxed() -> Vec<(Joint, Landmark)> {
    vec![
        (Joint::LeftShoulder, Landmark::new(0.4, 0.3)),
        (Joint::RightShoulder, Landmark::new(0.6, 0.3)),
        (Joint::LeftElbow, Landmark::new(0.4, 0.45)),
        (Joint::RightElbow, Landmark::new(0.6, 0.45)),
        (Joint::LeftWrist, Landmark::new(0.4, 0.75)),
        (Joint::RightWrist, Landmark::new(0.6, 0.75)),
        (Joint::LeftHip, Landmark::new(0.45, 0.6)),
        (Joint::RightHip, Landmark::new(0.55, 0.6)),
        (Joint::LeftKnee, Landmark::new(0.45, 0.8)),
        (Joint::RightKnee, Landmark::new(0.55, 0.8)),
    ]
}

fn with(overrides: &[(Joint, f64, f64)]) -> Landmarks {
    let extra = overrides
        .iter()
        .map(|&(joint, x, y)| (joint, Landmark::new(x, y)));
    Landmarks::from_joints(relaxed().into_iter().chain(extra)).unwrap()
}

#[test]
fn test_relaxed_pose_is_unknown() {
    assert_eq!(PoseClassifier::new().classify(&with(&[])), PoseLabel::Unknown);
}

#[test]
fn test_t_pose_scenario() {
    let landmarks = with(&[
        (Joint::LeftShoulder, 0.4, 0.4),
        (Joint::RightShoulder, 0.6, 0.4),
        (Joint::LeftElbow, 0.25, 0.4),
        (Joint::RightElbow, 0.75, 0.4),
        (Joint::LeftWrist, 0.1, 0.4),
        (Joint::RightWrist, 0.9, 0.4),
    ]);
    assert_eq!(PoseClassifier::new().classify(&landmarks), PoseLabel::TPose);
}

#[test]
fn test_hands_up_scenario_beats_waving() {
    let landmarks = with(&[
        (Joint::LeftWrist, 0.3, 0.1),
        (Joint::LeftElbow, 0.3, 0.3),
        (Joint::LeftShoulder, 0.3, 0.35),
        (Joint::RightWrist, 0.7, 0.1),
        (Joint::RightElbow, 0.7, 0.3),
        (Joint::RightShoulder, 0.7, 0.35),
    ]);
    let classifier = PoseClassifier::new();
    assert_eq!(classifier.classify(&landmarks), PoseLabel::HandsUp);
    assert!(classifier.matching(&landmarks).contains(&PoseLabel::Waving));
}

#[test]
fn test_sitting_scenario() {
    let landmarks = with(&[
        (Joint::LeftHip, 0.45, 0.6),
        (Joint::RightHip, 0.55, 0.6),
        (Joint::LeftKnee, 0.45, 0.5),
        (Joint::RightKnee, 0.55, 0.5),
    ]);
    assert_eq!(PoseClassifier::new().classify(&landmarks), PoseLabel::Sitting);
}

#[test]
fn test_boundary_wrist_shoulder_gap() {
    let level = |shoulder_y: f64| {
        with(&[
            (Joint::LeftShoulder, 0.4, shoulder_y),
            (Joint::RightShoulder, 0.6, shoulder_y),
            (Joint::LeftElbow, 0.25, 0.1),
            (Joint::RightElbow, 0.75, 0.1),
            (Joint::LeftWrist, 0.1, 0.1),
            (Joint::RightWrist, 0.9, 0.1),
        ])
    };
    let classifier = PoseClassifier::new();
    assert_ne!(classifier.classify(&level(0.0)), PoseLabel::TPose);
    assert_eq!(classifier.classify(&level(0.0001)), PoseLabel::TPose);
}

#[test]
fn test_decimal_gaps_around_near_threshold() {
    let level = |shoulder_y: f64| {
        with(&[
            (Joint::LeftShoulder, 0.4, shoulder_y),
            (Joint::RightShoulder, 0.6, shoulder_y),
            (Joint::LeftElbow, 0.25, 0.3),
            (Joint::RightElbow, 0.75, 0.3),
            (Joint::LeftWrist, 0.1, 0.3),
            (Joint::RightWrist, 0.9, 0.3),
        ])
    };
    let classifier = PoseClassifier::new();
    // 0.3 - 0.4 is slightly more than 0.1 apart, 0.3 - 0.2 slightly less.
    assert_ne!(classifier.classify(&level(0.4)), PoseLabel::TPose);
    assert_eq!(classifier.classify(&level(0.2)), PoseLabel::TPose);
}

#[test]
fn test_missing_right_knee() {
    let result = Landmarks::from_joints(
        relaxed()
            .into_iter()
            .filter(|(joint, _)| *joint != Joint::RightKnee),
    );
    match result {
        Err(ClassifyError::IncompleteInput(joint)) => assert_eq!(joint, Joint::RightKnee),
        other => panic!("expected incomplete input, got {other:?}"),
    }
}

#[test]
fn test_determinism_and_totality() {
    let classifier = PoseClassifier::new();
    for step in 0..=20 {
        let y = step as f64 / 20.0;
        let landmarks = with(&[(Joint::LeftWrist, 0.3, y), (Joint::RightWrist, 0.7, 1.0 - y)]);
        let first = classifier.classify(&landmarks);
        assert_eq!(first, classifier.classify(&landmarks));
        assert!(PoseLabel::ALL.contains(&first));
    }
}

#[test]
fn test_concurrent_classification() {
    let classifier = PoseClassifier::new();
    let landmarks = with(&[]);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || classifier.classify(&landmarks)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), PoseLabel::Unknown);
    }
}

#[test]
fn test_custom_config_changes_boundary() {
    // Wrists 0.12 above hip height: too far for the default standing rule.
    let landmarks = with(&[
        (Joint::LeftElbow, 0.3, 0.4),
        (Joint::RightElbow, 0.7, 0.4),
        (Joint::LeftWrist, 0.35, 0.48),
        (Joint::RightWrist, 0.65, 0.48),
    ]);
    assert_eq!(PoseClassifier::new().classify(&landmarks), PoseLabel::Unknown);

    let loose = PoseClassifier::with_config(ClassifierConfig::new().with_near_threshold(0.15))
        .unwrap();
    assert_eq!(loose.classify(&landmarks), PoseLabel::Standing);
}

#[test]
fn test_frames_pipeline() {
    let json = r#"[
        null,
        {"left_wrist": {"x": 0.3, "y": 0.1}},
        {
            "left_wrist": {"x": 0.3, "y": 0.1}, "right_wrist": {"x": 0.7, "y": 0.1},
            "left_elbow": {"x": 0.3, "y": 0.3}, "right_elbow": {"x": 0.7, "y": 0.3},
            "left_shoulder": {"x": 0.3, "y": 0.35}, "right_shoulder": {"x": 0.7, "y": 0.35},
            "left_hip": {"x": 0.4, "y": 0.6}, "right_hip": {"x": 0.6, "y": 0.6},
            "left_knee": {"x": 0.4, "y": 0.8}, "right_knee": {"x": 0.6, "y": 0.8}
        }
    ]"#;
    let frames: Vec<Option<Landmarks>> = parse_frames(json, Layout::MediaPipe)
        .unwrap()
        .into_iter()
        .map(|frame| frame.unwrap_or(None))
        .collect();
    let labels = classify_frames(&PoseClassifier::new(), &frames);
    assert_eq!(labels, vec![None, None, Some(PoseLabel::HandsUp)]);

    let summary = summarize(&labels);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.dominant(), Some(PoseLabel::HandsUp));
}
