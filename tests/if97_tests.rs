//! IF97 기준점 회귀 테스트. IAPWS-IF97 공식 문서의 검증 예제 값을 활용한다.
use rankine_cycle_toolbox::steam::{
    saturation_pressure_bar, If97Steam, PropertyError, PropertyInput, SteamProperties,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn assert_pt(p_bar: f64, t_k: f64, h: f64, v: f64, s: f64) {
    let steam = If97Steam::new();
    let input = PropertyInput::PT { p: p_bar, t: t_k };
    let label = format!("p={p_bar} bar, T={t_k} K");
    assert_close(&format!("h {label}"), steam.enthalpy(input).unwrap(), h, 1e-6);
    assert_close(&format!("s {label}"), steam.entropy(input).unwrap(), s, 1e-6);
    let v_actual = 1.0 / steam.density(input).unwrap();
    assert!(
        ((v_actual - v) / v).abs() < 1e-6,
        "v {label} expected {v} got {v_actual}"
    );
}

#[test]
fn region1_reference_point() {
    // IF97: p = 3 MPa (30 bar abs), T = 300 K
    assert_pt(30.0, 300.0, 115.331_273, 0.001_002_151_68, 0.392_294_792);
}

#[test]
fn region2_reference_points() {
    // IF97: p = 0.0035 MPa (0.035 bar abs), T = 300 K / 700 K
    assert_pt(0.035, 300.0, 2_549.911_45, 39.491_386_6, 8.522_389_67);
    assert_pt(0.035, 700.0, 3_335.683_75, 92.301_589_8, 10.174_999_6);
}

#[test]
fn region5_reference_points() {
    // IF97: p = 0.5 MPa / 30 MPa, T = 1500 K
    assert_pt(5.0, 1_500.0, 5_219.768_55, 1.384_550_90, 9.654_088_75);
    assert_pt(300.0, 1_500.0, 5_167.235_14, 0.023_076_129_9, 7.729_701_33);
}

#[test]
fn saturation_pressure_reference_points() {
    // IF97 Region 4 검증값: T = 300 K → 0.00353658941 MPa, T = 500 K → 2.63889776 MPa
    assert_close(
        "psat300K",
        saturation_pressure_bar(300.0).unwrap(),
        0.035_365_894_1,
        1e-9,
    );
    assert_close(
        "psat500K",
        saturation_pressure_bar(500.0).unwrap(),
        26.388_977_6,
        1e-8,
    );
}

#[test]
fn saturation_pressure_rejects_temperature_above_critical_point() {
    let err = saturation_pressure_bar(700.0).unwrap_err();
    assert!(matches!(err, PropertyError::OutOfRange { .. }));
}

#[test]
fn saturation_temperature_at_one_bar() {
    // IF97: Tsat(0.1 MPa) = 372.755919 K
    let steam = If97Steam::new();
    let t = steam
        .temperature(PropertyInput::PX { p: 1.0, x: 0.0 })
        .unwrap();
    assert_close("tsat1bar", t, 372.755_919, 1e-6);
}

#[test]
fn pressure_inside_dome_is_saturation_pressure() {
    let steam = If97Steam::new();
    let t = 303.15;
    let s_liquid = steam.entropy(PropertyInput::TX { t, x: 0.0 }).unwrap();
    let s_vapour = steam.entropy(PropertyInput::TX { t, x: 1.0 }).unwrap();
    let psat = saturation_pressure_bar(t).unwrap();
    // 30 °C 포화압력 ≈ 4.247 kPa
    assert_close("psat30C", psat, 0.042_47, 1e-3);
    for s in [s_liquid, 0.5 * (s_liquid + s_vapour), s_vapour] {
        assert_close("p(T, s)", steam.pressure(t, s).unwrap(), psat, 1e-12);
    }
}

#[test]
fn pressure_of_superheated_steam_recovers_input_pressure() {
    let steam = If97Steam::new();
    let (p, t) = (90.0, 673.15);
    let s = steam.entropy(PropertyInput::PT { p, t }).unwrap();
    assert_close("p(T, s)", steam.pressure(t, s).unwrap(), p, 1e-4);
}
