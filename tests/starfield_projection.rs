use vip_club_site_wasm::domain::random::SeededRandom;
use vip_club_site_wasm::domain::starfield::{
    Camera, DeviceHints, DeviceProfile, Star, Starfield, StarfieldSettings, fallback_dots,
};

fn hints(width: f64, agent: &str) -> DeviceHints {
    DeviceHints {
        viewport_width: width,
        user_agent: agent.to_string(),
        device_memory_gb: None,
        hardware_concurrency: None,
        canvas_supported: true,
    }
}

#[test]
fn device_profiles() {
    assert_eq!(hints(1280.0, "Mozilla/5.0 (X11; Linux x86_64)").profile(), DeviceProfile::Desktop);
    assert_eq!(hints(600.0, "Mozilla/5.0 (X11; Linux x86_64)").profile(), DeviceProfile::Mobile);
    assert_eq!(hints(390.0, "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)").profile(), DeviceProfile::Mobile);

    let weak_phone = DeviceHints { device_memory_gb: Some(2.0), ..hints(390.0, "Android 10") };
    assert_eq!(weak_phone.profile(), DeviceProfile::LowPower);

    let weak_desktop = DeviceHints { hardware_concurrency: Some(2.0), ..hints(1280.0, "Windows NT 10.0") };
    assert_eq!(weak_desktop.profile(), DeviceProfile::Desktop);

    let no_canvas = DeviceHints { canvas_supported: false, ..hints(1280.0, "") };
    assert_eq!(no_canvas.profile(), DeviceProfile::LowPower);
}

#[test]
fn settings_per_profile() {
    let desktop = StarfieldSettings::for_profile(DeviceProfile::Desktop).unwrap();
    let mobile = StarfieldSettings::for_profile(DeviceProfile::Mobile).unwrap();
    assert_eq!((desktop.star_count, desktop.camera_z), (10_000, 100.0));
    assert_eq!((mobile.star_count, mobile.camera_z), (2000, 50.0));
    assert!(mobile.rotation_per_frame < desktop.rotation_per_frame);
    assert!(StarfieldSettings::for_profile(DeviceProfile::LowPower).is_none());
}

#[test]
fn origin_projects_to_the_canvas_centre() {
    let camera = Camera::new(100.0, 800.0, 600.0);
    let star = camera.project(&Star { x: 0.0, y: 0.0, z: 0.0 }, 0.0, 1.2).unwrap();
    assert!((star.x - 400.0).abs() < 1e-9);
    assert!((star.y - 300.0).abs() < 1e-9);
    assert!((star.size - 3.6).abs() < 1e-9);
}

#[test]
fn clipped_stars_are_skipped() {
    let camera = Camera::new(100.0, 800.0, 600.0);
    assert!(camera.project(&Star { x: 0.0, y: 0.0, z: 150.0 }, 0.0, 1.0).is_none());
    assert!(camera.project(&Star { x: 0.0, y: 0.0, z: -950.0 }, 0.0, 1.0).is_none());
    assert!(camera.project(&Star { x: 1000.0, y: 0.0, z: 0.0 }, 0.0, 1.0).is_none());
}

#[test]
fn quarter_turn_moves_x_onto_the_view_axis() {
    let camera = Camera::new(100.0, 800.0, 600.0);
    let star = camera
        .project(&Star { x: 10.0, y: 0.0, z: 0.0 }, std::f64::consts::FRAC_PI_2, 1.0)
        .unwrap();
    assert!((star.x - 400.0).abs() < 1e-6);
}

#[test]
fn field_generation_and_rotation() {
    let settings = StarfieldSettings::for_profile(DeviceProfile::Mobile).unwrap();
    let mut field = Starfield::new(settings, &mut SeededRandom::new(3));
    assert_eq!(field.stars().len(), 2000);
    assert!(field.stars().iter().all(|s| s.x.abs() <= 500.0 && s.y.abs() <= 500.0 && s.z.abs() <= 500.0));

    field.advance();
    field.advance();
    assert!((field.rotation() - 0.0004).abs() < 1e-12);
    assert!(field.frame(800.0, 600.0).iter().all(|p| p.x >= 0.0 && p.x <= 800.0));
}

#[test]
fn fallback_dots_stay_in_range() {
    let dots = fallback_dots(100, &mut SeededRandom::new(9));
    assert_eq!(dots.len(), 100);
    assert!(dots.iter().all(|d| d.size_px < 2.0 && (0.3..0.8).contains(&d.opacity)));
    assert!(dots[0].inline_style().starts_with("position:absolute;"));
}
