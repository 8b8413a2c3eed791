use std::path::PathBuf;

use scenegen_core::GeneratorConfig;
use scenegen_packing::SceneRng;
use scenegen_storage::{Result, SceneEmitter};
use tracing::{info, instrument};

use crate::suite::Suite;

/// Renders `values` of `suite` in order and writes one file per value
pub fn emit_values(
    suite: Suite,
    values: &[usize],
    emitter: &SceneEmitter,
    rng: &mut SceneRng,
) -> Result<Vec<PathBuf>> {
    values
        .iter()
        .map(|&value| emitter.emit(value, &suite.render(value, rng)))
        .collect()
}

/// Writes every file of one suite under `<output_root>/<suite dir>`
#[instrument(skip_all, fields(suite = suite.dir_name()))]
pub fn run_suite(suite: Suite, config: &GeneratorConfig, rng: &mut SceneRng) -> Result<Vec<PathBuf>> {
    let emitter = SceneEmitter::create(
        config.output_root.join(suite.dir_name()),
        config.extension.as_str(),
    )?;
    let paths = emit_values(suite, suite.parameters(), &emitter, rng)?;
    info!(files = paths.len(), dir = %emitter.dir().display(), "suite written");
    Ok(paths)
}

/// Writes every suite. The random source is seeded once here and shared
/// by all suites in [`Suite::ALL`] order.
pub fn run_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let mut rng = SceneRng::new(config.seed);
    let mut written = Vec::new();
    for &suite in Suite::all() {
        written.extend(run_suite(suite, config, &mut rng)?);
    }
    info!(files = written.len(), root = %config.output_root.display(), "generation finished");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_emit_values_writes_in_order() {
        let tmp = tempdir().unwrap();
        let emitter = SceneEmitter::create(tmp.path().join("pyramid"), "xml").unwrap();
        let mut rng = SceneRng::new(1);

        let paths = emit_values(Suite::Pyramid, &[2, 3], &emitter, &mut rng).unwrap();
        assert_eq!(
            paths,
            vec![
                tmp.path().join("pyramid").join("2.xml"),
                tmp.path().join("pyramid").join("3.xml"),
            ]
        );
        let text = fs::read_to_string(&paths[1]).unwrap();
        assert_eq!(text.matches("<rigid_body_with_density ").count(), 11);
    }

    #[test]
    fn test_two_runs_identical() {
        let render_run = || {
            let tmp = tempdir().unwrap();
            let emitter = SceneEmitter::create(tmp.path(), "xml").unwrap();
            let mut rng = SceneRng::new(647_863_287_462);
            let paths =
                emit_values(Suite::OverlapBallsInBox3dIpopt, &[2, 3, 4], &emitter, &mut rng).unwrap();
            paths
                .iter()
                .map(|p| fs::read_to_string(p).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(render_run(), render_run());
    }

    #[test]
    fn test_rng_threads_across_scenes() {
        // The second scene continues the sequence instead of restarting it
        let mut rng = SceneRng::new(9);
        let first = Suite::OverlapBallsInBox3dIpopt.render(2, &mut rng);
        let second = Suite::OverlapBallsInBox3dIpopt.render(2, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_run_suite_rewrites_existing_files() {
        let tmp = tempdir().unwrap();
        let config = GeneratorConfig {
            output_root: tmp.path().to_path_buf(),
            ..GeneratorConfig::default()
        };
        let stale = tmp.path().join("pyramid").join("2.xml");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "stale").unwrap();

        let paths = run_suite(Suite::Pyramid, &config, &mut SceneRng::new(config.seed)).unwrap();
        assert_eq!(paths.len(), Suite::Pyramid.parameters().len());
        assert!(fs::read_to_string(&stale).unwrap().starts_with("<rigidbody3d_scene>"));
    }
}
