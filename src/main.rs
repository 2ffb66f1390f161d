use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use fov::ViewConeConfig;
use util::{lift, load_idm, save_idm};

use crate::{controller::Route, scene::Scene};

mod controller;
mod run;
mod scene;

pub const APP_NAME: &str = "viewcone";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Walk an observer through a scene and \
    measure its adaptive view cone")]
struct Args {
    #[arg(long, help = "View cone settings file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Scene file, a random scene is generated if omitted")]
    scene: Option<PathBuf>,

    #[arg(long, help = "Observer route file")]
    route: Option<PathBuf>,

    #[arg(long, default_value = APP_NAME, help = "Random scene seed")]
    seed: String,

    #[arg(long, default_value_t = 60, help = "Shapes in a random scene")]
    shapes: usize,

    #[arg(long, default_value_t = 200, help = "Frames to simulate")]
    frames: usize,

    #[arg(long, help = "Field of view in degrees")]
    fov: Option<f32>,

    #[arg(long, help = "Use a full 360 degree field of view")]
    panorama: bool,

    #[arg(long, help = "Maximum view distance")]
    view_range: Option<f32>,

    #[arg(long, help = "Bisection steps per discontinuity")]
    edge_iterations: Option<u32>,

    #[arg(long, help = "Write the last frame's mesh to an OBJ file")]
    obj: Option<PathBuf>,

    #[arg(
        long,
        help = "Write the effective config, scene and route files into \
                this directory and exit"
    )]
    dump: Option<PathBuf>,
}

impl Args {
    fn view_cone_config(&self) -> Result<ViewConeConfig> {
        let mut config: ViewConeConfig = match &self.config {
            Some(path) => load_idm(path)?,
            None => Default::default(),
        };

        if let Some(fov) = self.fov {
            config.fov = fov;
        }
        if self.panorama {
            config.fov = 360.0;
        }
        if let Some(range) = self.view_range {
            config.view_range = range;
        }
        if let Some(n) = self.edge_iterations {
            config.edge_iterations = n;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load the scene or scatter a random one around the route.
    fn scene(&self, route: &Route) -> Result<Scene> {
        match &self.scene {
            Some(path) => load_idm(path),
            None => {
                let reach = route
                    .waypoints
                    .iter()
                    .fold(0.0f32, |a, p| a.max(p.length()));
                let radius = (reach * 4.0).max(20.0);
                log::info!("seed: {}", self.seed);
                Ok(Scene::scatter(&self.seed, self.shapes, radius))
            }
        }
    }

    fn route(&self) -> Result<Route> {
        match &self.route {
            Some(path) => load_idm(path),
            None => Ok(Default::default()),
        }
    }
}

/// Write settings as files that `--config`, `--scene` and `--route` can
/// load back.
fn dump(
    dir: &Path,
    config: &ViewConeConfig,
    scene: &Scene,
    route: &Route,
) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create {}", dir.display()))?;
    save_idm(dir.join("config.idm"), config)?;
    save_idm(dir.join("scene.idm"), scene)?;
    save_idm(dir.join("route.idm"), route)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = args.view_cone_config()?;
    let route = args.route()?;
    let scene = args.scene(&route)?;
    log::info!(
        "{} shapes, fov {}, {} base rays",
        scene.len(),
        config.clamped_fov(),
        config.ray_count() + 1
    );
    if scene.is_empty() {
        log::warn!("scene is empty, every ray will miss");
    }
    for p in &route.waypoints {
        if scene.is_inside(lift(*p, route.eye_height)) {
            log::warn!("waypoint {p} is inside a solid shape");
        }
    }

    if let Some(dir) = &args.dump {
        dump(dir, &config, &scene, &route)?;
        log::info!("wrote settings to {}", dir.display());
        return Ok(());
    }

    let (stats, last) = run::run(&config, &scene, route, args.frames);
    log::info!("{stats}");

    if let (Some(path), Some(frame)) = (&args.obj, last) {
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        let mut w = BufWriter::new(file);
        frame.mesh.write_obj(&mut w)?;
        w.flush()?;
        log::info!("wrote last frame's mesh to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use fov::{Resolution, TriggerPolicy};
    use glam::vec2;

    use super::*;
    use crate::scene::{AxisBox, Pillar, Wall};

    #[test]
    fn dumped_settings_load_back() {
        let dir = std::env::temp_dir()
            .join(format!("{APP_NAME}-dump-{}", std::process::id()));

        let config = ViewConeConfig {
            fov: 135.5,
            resolution: Resolution::RayCount(12),
            triggers: TriggerPolicy::Coalesced,
            ..Default::default()
        };
        let scene = Scene {
            walls: vec![Wall(vec2(-1.5, 2.0), vec2(3.0, 4.25))],
            boxes: vec![AxisBox::new(vec2(5.0, -5.0), vec2(1.0, 2.0))],
            pillars: vec![Pillar {
                center: vec2(-6.0, 0.5),
                radius: 0.75,
            }],
        };
        let route = Route {
            look_target: Some(vec2(7.0, -2.5)),
            ..Default::default()
        };

        dump(&dir, &config, &scene, &route).unwrap();
        let config2: ViewConeConfig =
            load_idm(dir.join("config.idm")).unwrap();
        let scene2: Scene = load_idm(dir.join("scene.idm")).unwrap();
        let route2: Route = load_idm(dir.join("route.idm")).unwrap();

        // Defaults go through as well.
        dump(
            &dir,
            &ViewConeConfig::default(),
            &Scene::scatter("dump", 6, 30.0),
            &Route::default(),
        )
        .unwrap();
        let config3: ViewConeConfig =
            load_idm(dir.join("config.idm")).unwrap();
        let scene3: Scene = load_idm(dir.join("scene.idm")).unwrap();
        let route3: Route = load_idm(dir.join("route.idm")).unwrap();

        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(config2, config);
        assert_eq!(scene2, scene);
        assert_eq!(route2, route);
        assert_eq!(config3, ViewConeConfig::default());
        assert_eq!(scene3, Scene::scatter("dump", 6, 30.0));
        assert_eq!(route3, Route::default());
    }
}
