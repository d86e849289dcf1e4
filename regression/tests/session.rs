use regression::{
    configs::{ParamGenConfig, PlaygroundConfig},
    normalization::Normalizer,
    render::{Series, SeriesStore},
    session::Session,
    training::{LinearRegressor, PolynomialRegressor, Regressor},
};

const SEED: u64 = 42;

fn seeded_session() -> Session<SeriesStore> {
    let config = PlaygroundConfig {
        seed: Some(SEED),
        ..Default::default()
    };

    Session::new(&config, SeriesStore::new()).unwrap()
}

fn assert_close(got: f32, expected: f32, tolerance: f32) {
    assert!(
        (got - expected).abs() < tolerance,
        "got {got}, expected {expected} +- {tolerance}"
    );
}

#[test]
fn datasets_grow_with_every_click() {
    let mut session = seeded_session();

    for k in 0..12 {
        assert_eq!(session.linear().len(), k);
        assert_eq!(session.polynomial().len(), k);

        let x = (k as f32 - 6.) * 35.;
        session.point_added(x, 0.3 * x - 20.);
    }

    assert_eq!(session.linear().len(), 12);
    assert_eq!(session.polynomial().len(), 12);
    assert_eq!(session.renderer().points(Series::Data).len(), 12);
}

#[test]
fn same_seed_same_everything() {
    let clicks = [(10., 200.), (-150., -30.), (90., 45.), (240., -240.), (-5., 5.)];

    let mut a = seeded_session();
    let mut b = seeded_session();

    assert_eq!(a.linear().params(), b.linear().params());
    assert_eq!(a.polynomial().params(), b.polynomial().params());

    for (x, y) in clicks {
        a.point_added(x, y);
        b.point_added(x, y);

        assert_eq!(a.linear().params(), b.linear().params());
        assert_eq!(a.polynomial().params(), b.polynomial().params());
        for series in Series::ALL {
            assert_eq!(a.renderer().points(series), b.renderer().points(series));
        }
    }
}

#[test]
fn sample_shapes_in_the_training_domain() {
    let mut session = seeded_session();
    session.point_added(50., 60.);

    let linear = session.linear().sample();
    let xs: Vec<_> = linear.points().iter().map(|&(x, _)| x).collect();
    assert_eq!(xs, [-1., 1.]);

    let polynomial = session.polynomial().sample();
    assert_eq!(polynomial.len(), 100);
    assert_eq!(polynomial.points()[0].0, -1.);
    assert_close(polynomial.points()[99].0, 0.98, 1e-5);
    for pair in polynomial.points().windows(2) {
        assert_close(pair[1].0 - pair[0].0, 0.02, 1e-5);
    }
}

#[test]
fn linear_fits_a_line() {
    let normalizer = Normalizer::default();
    let mut linear = LinearRegressor::linear([0., 0.], normalizer);

    for k in -19..=19 {
        let x = k as f32 * 0.05;
        let (raw_x, raw_y) = normalizer.denormalize((x, 2. * x + 1.));
        linear.observe(raw_x, raw_y);
    }

    assert_close(linear.params()[0], 2., 0.1);
    assert_close(linear.params()[1], 1., 0.1);
}

#[test]
fn resampling_without_clicks_is_identical() {
    let mut session = seeded_session();
    session.point_added(-80., 130.);

    assert_eq!(session.linear().sample(), session.linear().sample());
    assert_eq!(session.polynomial().sample(), session.polynomial().sample());
}

#[test]
fn single_click_at_the_origin() {
    let mut session = seeded_session();
    session.point_added(0., 0.);

    assert_eq!(session.linear().dataset().iter().collect::<Vec<_>>(), [(0., 0.)]);

    let store = session.renderer();
    let linear = store.points(Series::Linear);
    assert_eq!(linear.len(), 2);
    assert!(linear.iter().all(|&(x, y)| x.is_finite() && y.is_finite()));
    assert_eq!(store.points(Series::Data), [(0., 0.)]);
    assert_eq!(store.redraws(), 1);
}

#[test]
fn repeated_clicks_on_a_line() {
    let mut session = seeded_session();

    for _ in 0..5 {
        for (x, y) in [(100., 50.), (-100., -50.), (250., 125.)] {
            session.point_added(x, y);
        }
    }

    let params = session.linear().params();
    assert_close(params[0], 0.5, 0.05);
    assert_close(params[1], 0., 0.05);
    assert_eq!(session.renderer().redraws(), 15);
}

#[test]
fn no_clicks_emit_nothing() {
    let session = seeded_session();

    assert!(session.linear().is_empty());
    assert!(session.polynomial().is_empty());
    assert!(session.linear().last_losses().is_empty());
    assert!(session.polynomial().last_losses().is_empty());
    assert_eq!(session.events(), 0);

    let store = session.renderer();
    for series in Series::ALL {
        assert!(store.points(series).is_empty());
    }
    assert_eq!(store.redraws(), 0);
}

#[test]
fn polynomial_fits_a_cubic() {
    let normalizer = Normalizer::default();
    let mut polynomial = PolynomialRegressor::polynomial([0.; 4], normalizer);

    for k in -9..=9 {
        let x = k as f32 * 0.1;
        let y = 0.8 * x * x * x - 0.5 * x + 0.1;
        let (raw_x, raw_y) = normalizer.denormalize((x, y));
        polynomial.observe(raw_x, raw_y);
    }

    let loss = *polynomial.last_losses().last().unwrap();
    assert!(loss < 1e-3, "loss {loss}");

    for (got, expected) in polynomial.params().iter().zip([0.8, 0., -0.5, 0.1]) {
        assert_close(*got, expected, 0.05);
    }
}

#[test]
fn constant_init_from_config() {
    let mut config = PlaygroundConfig::default();
    config.linear.init = ParamGenConfig::Const { value: 0.5 };
    config.polynomial.init = ParamGenConfig::Const { value: -0.25 };

    let session = Session::new(&config, SeriesStore::new()).unwrap();

    assert_eq!(session.linear().params(), [0.5, 0.5]);
    assert_eq!(session.polynomial().params(), [-0.25; 4]);
}

#[test]
fn display_curves_follow_the_normalizer() {
    let mut config = PlaygroundConfig::default();
    config.seed = Some(SEED);
    config.normalizer.max_x = 200.;
    config.normalizer.max_y = 100.;

    let mut session = Session::new(&config, SeriesStore::new()).unwrap();
    session.point_added(40., 10.);

    let linear = session.renderer().points(Series::Linear);
    assert_eq!(linear[0].0, -200.);
    assert_eq!(linear[1].0, 200.);
    assert_eq!(session.linear().dataset().iter().collect::<Vec<_>>(), [(0.2, 0.1)]);
}
