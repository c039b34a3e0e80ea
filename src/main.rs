use engine::{
    Agent, Ball, DecisionEngine, EngineConfig, FixedHomePositions, GameSnapshot, PossessionRole,
    Side, Velocity,
};
use env_logger::Env;
use log::info;
use nalgebra::Vector3;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let mut homes = FixedHomePositions::default();
    homes.insert(1, Vector3::new(400.0, 5000.0, 0.0));
    homes.insert(2, Vector3::new(2500.0, 2300.0, 0.0));
    homes.insert(3, Vector3::new(2500.0, 4100.0, 0.0));
    homes.insert(4, Vector3::new(2500.0, 5900.0, 0.0));
    homes.insert(5, Vector3::new(2500.0, 7700.0, 0.0));
    homes.insert(8, Vector3::new(8000.0, 5000.0, 0.0));
    homes.insert(9, Vector3::new(12000.0, 5000.0, 0.0));
    homes.insert(10, Vector3::new(11000.0, 3200.0, 0.0));
    homes.insert(11, Vector3::new(11000.0, 6800.0, 0.0));

    let mut engine = DecisionEngine::new(
        EngineConfig::new(Side::Home, 9),
        Box::new(homes),
    );

    for (label, snapshot) in sample_turns() {
        let commands = engine.decide(&snapshot);
        info!("{label}: {commands:?}");
    }
}

/// A handful of hand-built turns covering each possession state, so the
/// engine can be watched without a match server.
fn sample_turns() -> Vec<(&'static str, GameSnapshot)> {
    let me = Agent::new(9, Side::Home, Vector3::new(9000.0, 5000.0, 0.0));
    let team = vec![
        Agent::new(1, Side::Home, Vector3::new(400.0, 5000.0, 0.0)),
        Agent::new(4, Side::Home, Vector3::new(2500.0, 5900.0, 0.0)),
        Agent::new(8, Side::Home, Vector3::new(8000.0, 5200.0, 0.0)),
        me.clone(),
        Agent::new(10, Side::Home, Vector3::new(11000.0, 3200.0, 0.0)),
    ];
    let opponents = vec![
        Agent::new(1, Side::Away, Vector3::new(19600.0, 5000.0, 0.0)),
        Agent::new(5, Side::Away, Vector3::new(9400.0, 5300.0, 0.0)),
        Agent::new(8, Side::Away, Vector3::new(12000.0, 4600.0, 0.0)),
    ];

    let disputed = GameSnapshot {
        me: me.clone(),
        team: team.clone(),
        opponents: opponents.clone(),
        ball: Ball::new(
            Vector3::new(9800.0, 5100.0, 0.0),
            Velocity::new(Vector3::new(-1.0, 0.0, 0.0), 120.0),
        ),
        role: PossessionRole::Disputing,
        ball_holder: None,
        opponent_goalkeeper: Some(opponents[0].clone()),
    };

    let mut holding = disputed.clone();
    holding.role = PossessionRole::Holding;
    holding.ball = Ball::stationary(me.position);
    holding.ball_holder = Some(me.clone());

    let mut supporting = disputed.clone();
    supporting.role = PossessionRole::Supporting;
    supporting.ball = Ball::stationary(team[4].position);
    supporting.ball_holder = Some(team[4].clone());

    let mut defending = disputed.clone();
    defending.role = PossessionRole::Defending;
    defending.ball = Ball::stationary(opponents[2].position);
    defending.ball_holder = Some(opponents[2].clone());

    vec![
        ("disputing", disputed),
        ("holding", holding),
        ("supporting", supporting),
        ("defending", defending),
    ]
}
