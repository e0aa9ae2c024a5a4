//! Tests for progress tracking and multi-file batch processing

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;
    use tilestitch::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use tilestitch::io::progress::{ProgressManager, Stage};

    const STAGES: [Stage; 5] = [
        Stage::Parsing,
        Stage::Assembling,
        Stage::Stitching,
        Stage::Scanning,
        Stage::Exporting,
    ];

    // Tests stage positions are consecutive and below the stage count
    // Verified by giving two stages the same position
    #[test]
    fn test_stage_positions() {
        let positions: Vec<u64> = STAGES.iter().map(|stage| stage.position()).collect();

        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
        assert_eq!(Stage::COUNT, STAGES.len() as u64);
        assert_eq!(Stage::Assembling.to_string(), "assembling");
    }

    // Tests ProgressManager construction
    #[test]
    fn test_progress_manager_new() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();

        pm.initialize(1);
        assert_eq!(pm.file_count(), 1);
        pm.start_file(0, Path::new("day20.txt"));
        pm.set_stage(0, Stage::Assembling);
        pm.complete_file(0, Duration::from_millis(100));
        pm.finish();
    }

    // Tests default trait implementation
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();
        pm.initialize(2);

        for (index, name) in ["a.txt", "b.txt"].iter().enumerate() {
            pm.start_file(index, Path::new(name));
            for stage in STAGES {
                pm.set_stage(index, stage);
            }
            pm.complete_file(index, Duration::from_millis(20));
        }
        pm.finish();
    }

    // Tests batch mode with more files than individual bars
    // Verified by creating a bar per file
    #[test]
    fn test_initialize_batch_mode() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(file_count);

        for i in 0..file_count {
            pm.start_file(i, Path::new(&format!("puzzle{i}.txt")));
            pm.set_stage(i, Stage::Stitching);
            pm.complete_file(i, Duration::from_millis(5));
        }
        pm.finish();
        assert_eq!(pm.file_count(), file_count);
    }

    // Tests stage updates for files never started are ignored
    #[test]
    fn test_set_stage_unknown_file() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.set_stage(4, Stage::Scanning);
        pm.complete_file(4, Duration::ZERO);
        pm.finish();
    }
}
