use diverge::integrator::{ExplicitEuler, IntegrationScheme, Stepper, SymplecticEuler};
use diverge::kinematics::GRAVITY;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn symplectic_first_three_positions() {
    let mut it = SymplecticEuler::new(10.0, GRAVITY);
    assert!(close(it.next().unwrap(), 981.0));
    assert!(close(it.next().unwrap(), 2943.0));
    assert!(close(it.next().unwrap(), 5886.0));
    assert!(close(it.velocity(), 294.3));
    assert_eq!(it.steps(), 3);
}

#[test]
fn symplectic_updates_velocity_before_position() {
    let mut it = SymplecticEuler::new(10.0, GRAVITY);
    let p = it.next().unwrap();
    // new velocity (98.1) times dt, not the initial zero velocity
    assert!(close(p, it.velocity() * 10.0));
}

#[test]
fn explicit_lags_one_step_behind_symplectic() {
    let mut it = ExplicitEuler::new(10.0, GRAVITY);
    assert!(close(it.next().unwrap(), 0.0));
    assert!(close(it.next().unwrap(), 981.0));
    assert!(close(it.next().unwrap(), 2943.0));
    assert!(close(it.position(), 2943.0));
    assert!(close(it.velocity(), 294.3));
}

#[test]
fn integrators_never_end() {
    let mut it = SymplecticEuler::new(0.1, GRAVITY);
    assert_eq!(it.by_ref().take(10_000).count(), 10_000);
    assert!(it.next().is_some());
    assert_eq!(it.size_hint(), (usize::MAX, None));
}

#[test]
fn scheme_builds_matching_stepper() {
    let s = IntegrationScheme::default().integrator(10.0, GRAVITY);
    assert!(matches!(s, Stepper::Symplectic(_)));
    assert_eq!(s.scheme(), IntegrationScheme::SymplecticEuler);

    let mut e = IntegrationScheme::ExplicitEuler.integrator(10.0, GRAVITY);
    assert_eq!(e.scheme(), IntegrationScheme::ExplicitEuler);
    e.next();
    e.next();
    assert_eq!(e.steps(), 2);
    assert!(close(e.position(), 981.0));
}

#[test]
fn stepper_yields_same_values_as_inner_integrator() {
    let direct: Vec<f64> = SymplecticEuler::new(2.5, 3.0).take(50).collect();
    let wrapped: Vec<f64> = IntegrationScheme::SymplecticEuler
        .integrator(2.5, 3.0)
        .take(50)
        .collect();
    assert_eq!(direct, wrapped);
}

#[test]
fn scheme_labels() {
    assert_eq!(IntegrationScheme::SymplecticEuler.label(), "Euler Integration");
    assert_eq!(
        IntegrationScheme::ExplicitEuler.label(),
        "Explicit Euler Integration"
    );
}
