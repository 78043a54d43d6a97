use glam::{Vec2, Vec3};
use orbit_rig::config::HomePose;
use orbit_rig::core::input::InputFrame;
use orbit_rig::demo::demo_config;
use orbit_rig::math::{orbit_rotation, AABB};
use orbit_rig::traits::NoInput;
use orbit_rig::{BlockingContext, CameraController, CameraRig, Contact, InputSource, RigConfig};

const DT: f32 = 1.0 / 60.0;

fn rig_in(bounds: Option<AABB>, x: f32) -> CameraRig {
    let config = RigConfig {
        bounds,
        home: HomePose {
            position: Vec3::new(x, 0.0, 0.0),
            yaw_deg: 0.0,
        },
        ..Default::default()
    };
    CameraRig::new(config).unwrap()
}

fn bounded_rig_at(x: f32) -> CameraRig {
    rig_in(
        Some(AABB::new(
            Vec3::new(-50.0, -10.0, -50.0),
            Vec3::new(50.0, 40.0, 50.0),
        )),
        x,
    )
}

/// Unbounded rig at the origin facing -Z, so strafing runs along X.
fn free_rig() -> CameraRig {
    rig_in(None, 0.0)
}

fn run(rig: &mut CameraRig, input: &InputFrame, frames: u32) {
    for _ in 0..frames {
        rig.advance(DT, input);
    }
}

/// Only strafes; every other channel keeps the trait's neutral default.
struct StrafeOnly(f32);

impl InputSource for StrafeOnly {
    fn move_axis(&self) -> Vec2 {
        Vec2::new(self.0, 0.0)
    }
}

#[cfg(test)]
mod rig_tests {
    use super::*;

    #[test]
    fn test_zero_input_is_idempotent_at_rest() {
        let mut rig = CameraRig::new(demo_config()).unwrap();
        let before = rig.snapshot();
        for _ in 0..120 {
            rig.advance(DT, &NoInput);
        }
        assert_eq!(rig.snapshot(), before);
    }

    #[test]
    fn test_zero_input_is_idempotent_after_orbit_settles() {
        let mut rig = CameraRig::new(demo_config()).unwrap();
        rig.advance(DT, &InputFrame::orbiting(Vec2::new(40.0, 10.0)));
        run(&mut rig, &InputFrame::default(), 600);

        let settled = rig.snapshot();
        rig.advance(DT, &NoInput);
        assert_eq!(rig.snapshot(), settled);
        assert_eq!(
            rig.camera_rotation(),
            orbit_rotation(rig.target_pitch(), rig.target_yaw())
        );
    }

    #[test]
    fn test_edge_push_stops_at_wall() {
        let mut rig = bounded_rig_at(49.9);
        run(&mut rig, &InputFrame::moving(Vec2::X), 60);
        assert_eq!(rig.position(), Vec3::new(50.0, 0.0, 0.0));

        run(&mut rig, &InputFrame::moving(Vec2::X), 60);
        assert_eq!(rig.position().x, 50.0);
    }

    #[test]
    fn test_edge_push_from_center_lands_exactly_on_wall() {
        let mut rig = bounded_rig_at(0.0);
        run(&mut rig, &InputFrame::moving(Vec2::X), 1300);
        assert_eq!(rig.position(), Vec3::new(50.0, 0.0, 0.0));

        run(&mut rig, &InputFrame::moving(Vec2::X), 120);
        assert_eq!(rig.position().x, 50.0);
        assert!(rig.contact().is_touching());
    }

    #[test]
    fn test_flat_bounds_still_confine_ground() {
        let flat = AABB::new(Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 0.0, 50.0));
        let mut rig = rig_in(Some(flat), 0.0);
        assert!(rig.bounds().is_some());

        run(&mut rig, &InputFrame::moving(Vec2::X), 3000);
        assert_eq!(rig.position(), Vec3::new(50.0, 0.0, 0.0));
        assert!(rig.contact().is_touching());
    }

    #[test]
    fn test_non_finite_axes_leave_rig_untouched() {
        let mut rig = bounded_rig_at(10.0);
        let start = rig.snapshot();

        rig.advance(DT, &InputFrame::moving(Vec2::new(f32::NAN, 0.0)));
        rig.advance(DT, &InputFrame::zooming(f32::INFINITY));
        rig.advance(DT, &InputFrame::orbiting(Vec2::new(f32::NEG_INFINITY, f32::NAN)));
        rig.advance(DT, &InputFrame::default());

        assert!(rig.position().is_finite());
        assert!(rig.eye_position().is_finite());
        assert_eq!(rig.snapshot(), start);

        run(&mut rig, &InputFrame::moving(Vec2::X), 60);
        assert!((rig.position().x - 12.5).abs() < 1e-3);
    }

    #[test]
    fn test_non_finite_multipliers_are_ignored() {
        let mut rig = free_rig();
        rig.set_movement_speed_multiplier(f32::NAN);
        rig.set_rotation_speed_multiplier(f32::INFINITY);

        run(&mut rig, &InputFrame::moving(Vec2::X), 60);
        assert!(rig.position().is_finite());
        assert!((rig.position().x - 2.5).abs() < 1e-3);

        rig.advance(DT, &InputFrame::orbiting(Vec2::new(1.0, 0.0)));
        assert!((rig.target_yaw() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_push_into_wall_slides_along_it() {
        let mut rig = bounded_rig_at(50.0);
        run(&mut rig, &InputFrame::moving(Vec2::new(1.0, 1.0)), 30);

        let position = rig.position();
        assert_eq!(position.x, 50.0);
        // Forward is -Z at yaw 0.
        assert!(position.z < -1.0);
        assert_eq!(position.y, 0.0);
    }

    #[test]
    fn test_moving_away_from_wall_is_not_hindered() {
        let mut rig = bounded_rig_at(50.0);
        run(&mut rig, &InputFrame::moving(Vec2::NEG_X), 60);
        assert!((rig.position().x - 47.5).abs() < 1e-3);
    }

    #[test]
    fn test_movement_multiplier_scales_speed() {
        let mut rig = free_rig();
        rig.set_movement_speed_multiplier(2.0);
        run(&mut rig, &InputFrame::moving(Vec2::Y), 60);
        assert!((rig.position().z + 5.0).abs() < 1e-3);
        assert_eq!(rig.position().x, 0.0);
    }

    #[test]
    fn test_trait_defaults_drive_the_rig() {
        let mut rig = free_rig();
        for _ in 0..60 {
            CameraController::advance(&mut rig, DT, &StrafeOnly(1.0));
        }
        assert!((rig.position().x - 2.5).abs() < 1e-3);
        assert_eq!(rig.target_distance(), 25.0);
    }

    #[test]
    fn test_scrambled_input_never_leaves_bounds() {
        let mut rig = CameraRig::new(demo_config()).unwrap();
        let bounds = *rig.bounds().unwrap();

        let mut seed = 0x2545_f491_u32;
        let mut next = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
        };

        let mut pointer = Vec2::ZERO;
        for frame in 0..3000 {
            pointer += Vec2::new(next(), next()) * 200.0;
            let input = InputFrame {
                move_axis: Vec2::new(next(), next()),
                zoom_axis: Vec2::new(0.0, next() * 3.0),
                look_axis: Vec2::new(next(), next()) * 40.0,
                pointer,
                pan_pressed: frame % 50 == 0,
                pan_released: frame % 50 == 40,
                orbit_held: frame % 7 < 3,
                recenter: false,
            };
            rig.advance(DT * (1.0 + next()), &input);

            let position = rig.position();
            assert!(bounds.contains(position), "rig escaped to {position:?} at frame {frame}");
            assert!(bounds.contains(rig.eye_position()));
            assert_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn test_orbit_at_wall_pulls_rig_onto_line_of_sight() {
        let mut config = demo_config();
        config.home = HomePose {
            position: Vec3::new(45.0, 0.0, 0.0),
            yaw_deg: 0.0,
        };
        let mut rig = CameraRig::new(config).unwrap();

        // Quarter turn left so the camera looks toward -X with the eye pressed on the +X wall.
        let quarter_turn = -90.0 / rig.config().orbit_speed;
        rig.advance(DT, &InputFrame::orbiting(Vec2::new(quarter_turn, 0.0)));
        run(&mut rig, &InputFrame::orbiting(Vec2::ZERO), 240);

        let position = rig.position();
        let eye = rig.eye_position();
        let forward = rig.forward();
        assert!(position.x < 40.0, "rig stayed at {position:?}");
        assert!(eye.x <= 50.0 + 1e-3);
        assert!(rig.bounds().unwrap().contains(position));

        let to_rig = position - eye;
        let cross = to_rig.x * forward.z - to_rig.z * forward.x;
        assert!(cross.abs() < 1e-2, "rig is off the line of sight by {cross}");
        assert!(to_rig.dot(forward) > 0.0);
    }

    #[test]
    fn test_orbit_away_from_walls_leaves_rig_in_place() {
        let mut rig = CameraRig::new(demo_config()).unwrap();
        run(&mut rig, &InputFrame::orbiting(Vec2::new(20.0, 0.0)), 60);
        assert_eq!(rig.position(), Vec3::ZERO);
    }

    #[test]
    fn test_recenter_restores_home_pose() {
        let mut rig = CameraRig::new(demo_config()).unwrap();
        run(&mut rig, &InputFrame::moving(Vec2::new(0.3, 1.0)), 90);
        run(&mut rig, &InputFrame::zooming(1.0), 30);
        run(&mut rig, &InputFrame::orbiting(Vec2::new(30.0, -20.0)), 30);
        assert_ne!(rig.position(), Vec3::ZERO);

        rig.advance(DT, &InputFrame::recentering());

        assert_eq!(rig.position(), Vec3::ZERO);
        assert_eq!(rig.target_distance(), 25.0);
        assert_eq!(rig.distance(), 25.0);
        assert_eq!(rig.target_pitch(), 45.0);
        assert_eq!(rig.target_yaw(), -90.0);
        assert_eq!(rig.camera_rotation(), orbit_rotation(45.0, -90.0));
    }

    #[test]
    fn test_recenter_cancels_drag_in_progress() {
        let mut rig = CameraRig::default();
        rig.advance(
            DT,
            &InputFrame {
                pan_pressed: true,
                ..Default::default()
            },
        );
        rig.advance(DT, &InputFrame::recentering());

        rig.advance(
            DT,
            &InputFrame {
                pointer: Vec2::new(300.0, 0.0),
                ..Default::default()
            },
        );
        assert_eq!(rig.position(), Vec3::ZERO);
    }

    #[test]
    fn test_drag_right_moves_rig_left() {
        let mut rig = free_rig();
        rig.advance(
            DT,
            &InputFrame {
                pan_pressed: true,
                ..Default::default()
            },
        );
        rig.advance(
            DT,
            &InputFrame {
                pointer: Vec2::new(60.0, 0.0),
                ..Default::default()
            },
        );
        // 60 px * 2.5 speed * dt
        assert!((rig.position().x + 2.5).abs() < 1e-3);
    }

    #[test]
    fn test_movement_block_swallows_pan() {
        let blocking = BlockingContext::new();
        let block = blocking.add_movement_signal();
        let mut rig = CameraRig::default().with_blocking(blocking);

        rig.advance(
            DT,
            &InputFrame {
                pan_pressed: true,
                ..Default::default()
            },
        );
        block.set(true);
        let dragged = InputFrame {
            pointer: Vec2::new(100.0, 0.0),
            move_axis: Vec2::Y,
            ..Default::default()
        };
        rig.advance(DT, &dragged);
        assert_eq!(rig.position(), Vec3::ZERO);

        // Unblocking must not release the drag swallowed while blocked.
        block.set(false);
        rig.advance(
            DT,
            &InputFrame {
                pointer: Vec2::new(100.0, 0.0),
                ..Default::default()
            },
        );
        assert_eq!(rig.position(), Vec3::ZERO);
    }

    #[test]
    fn test_movement_block_still_allows_zoom_and_orbit() {
        let blocking = BlockingContext::new();
        blocking.add_movement_signal().set(true);
        let mut rig = free_rig().with_blocking(blocking);

        rig.advance(DT, &InputFrame::zooming(4.0));
        rig.advance(DT, &InputFrame::orbiting(Vec2::new(100.0, 0.0)));
        assert_eq!(rig.target_distance(), 24.0);
        assert!((rig.target_yaw() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_snapshot_serializes_contact_state() {
        let rig = CameraRig::new(demo_config()).unwrap();
        let json = serde_json::to_value(rig.snapshot()).unwrap();
        assert_eq!(json["contact"]["state"], "inside");
        assert_eq!(json["target_distance"], 25.0);

        let free = serde_json::to_value(CameraRig::default().snapshot()).unwrap();
        assert_eq!(free["contact"]["state"], "unconstrained");
    }

    #[test]
    fn test_contact_reports_touching_faces() {
        let mut rig = bounded_rig_at(0.0);
        rig.set_bounds(Some(AABB::new(
            Vec3::new(-50.0, -10.0, -50.0),
            Vec3::new(50.0, 10.0, 50.0),
        )));
        match rig.contact() {
            Contact::Touching(faces) => {
                assert!(faces.contains(orbit_rig::Face::MaxY));
                assert!(!faces.contains(orbit_rig::Face::MaxX));
            }
            other => panic!("expected touching contact, got {other:?}"),
        }
    }
}
