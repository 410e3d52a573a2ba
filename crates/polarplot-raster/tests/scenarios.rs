use polarplot_core::{lengths_from_point, render_transcript, Point, StepCommand};
use polarplot_raster::{
    rasterize_circle, rasterize_line, rasterize_path, trace_path, CircleSampler, RasterConfig,
    RasterizerState, Replayer, SeamMode,
};

fn square() -> Vec<Point> {
    vec![
        Point::new(100.0, 100.0),
        Point::new(100.0, 200.0),
        Point::new(200.0, 200.0),
        Point::new(200.0, 100.0),
        Point::new(100.0, 100.0),
    ]
}

fn replay_state(start: Point, commands: &[StepCommand], config: &RasterConfig) -> RasterizerState {
    let geometry = config.geometry().unwrap();
    commands
        .iter()
        .fold(RasterizerState::new(lengths_from_point(geometry, start)), |state, cmd| {
            state.apply(*cmd, config.len_step)
        })
}

#[test]
fn test_closed_square_returns_to_start() {
    let config = RasterConfig::default().with_seam_mode(SeamMode::Carried);
    let commands: Vec<StepCommand> = rasterize_path(square(), &config).unwrap().collect();
    assert!(!commands.is_empty());

    let start = lengths_from_point(config.geometry().unwrap(), square()[0]);
    let end = replay_state(square()[0], &commands, &config);
    assert!(end.lengths().max_deviation(&start) <= config.len_step);
}

#[test]
fn test_segment_local_square_skips_vertex_catch_up() {
    let local = RasterConfig::default();
    let carried = RasterConfig::default().with_seam_mode(SeamMode::Carried);

    let local_commands = rasterize_path(square(), &local).unwrap().count();
    let carried_commands = rasterize_path(square(), &carried).unwrap().count();

    assert!(local_commands > 0);
    assert!(carried_commands > local_commands);
}

#[test]
fn test_segment_local_square_closure_drift() {
    let config = RasterConfig::default();
    let commands: Vec<StepCommand> = rasterize_path(square(), &config).unwrap().collect();
    assert!(!commands.is_empty());

    // Each vertex restarts from its own waypoint, so the drift is not recovered.
    let start = lengths_from_point(config.geometry().unwrap(), square()[0]);
    let end = replay_state(square()[0], &commands, &config);
    let drift = end.lengths().max_deviation(&start);
    assert!(drift > config.len_step);
    assert!((drift - 4.0 * config.len_step).abs() < 1e-6, "drift {drift}");
}

#[test]
fn test_circle_is_49_concatenated_lines() {
    let config = RasterConfig::default();
    let center = Point::new(200.0, 200.0);

    let mut circle = rasterize_circle(center, 100.0, &config).unwrap();
    let commands: Vec<StepCommand> = circle.by_ref().collect();
    assert_eq!(circle.segments_started(), 49);

    let samples: Vec<Point> = CircleSampler::new(center, 100.0, 50).unwrap().collect();
    assert_eq!(samples.len(), 50);
    let mut expected = Vec::new();
    for pair in samples.windows(2) {
        expected.extend(rasterize_line(pair[0], pair[1], &config).unwrap());
    }
    assert_eq!(commands, expected);
}

#[test]
fn test_carried_circle_matches_path_over_samples() {
    let config = RasterConfig::default().with_seam_mode(SeamMode::Carried);
    let center = Point::new(180.0, 250.0);
    let circle: Vec<StepCommand> = rasterize_circle(center, 60.0, &config).unwrap().collect();

    let samples: Vec<Point> = CircleSampler::new(center, 60.0, 50).unwrap().collect();
    let path: Vec<StepCommand> = rasterize_path(samples, &config).unwrap().collect();
    assert_eq!(circle, path);
}

#[test]
fn test_state_stays_within_one_length_step_of_each_waypoint() {
    let config = RasterConfig::default();
    let geometry = config.geometry().unwrap();
    let (start, end) = (Point::new(30.0, 20.0), Point::new(370.0, 390.0));

    let mut state: Option<RasterizerState> = None;
    let mut rebuilt = Vec::new();
    for waypoint in trace_path(start, end, config.cart_step).unwrap() {
        let target = lengths_from_point(geometry, waypoint);
        let current = state.unwrap_or(RasterizerState::new(target));
        let mut catch_up = current.catch_up(target, config.len_step);
        rebuilt.extend(catch_up.by_ref());
        let settled = catch_up.state();
        assert!(settled.lengths().max_deviation(&target) <= config.len_step);
        state = Some(settled);
    }

    let streamed: Vec<StepCommand> = rasterize_line(start, end, &config).unwrap().collect();
    assert_eq!(streamed, rebuilt);
}

#[test]
fn test_command_alphabet() {
    let config = RasterConfig::default().with_len_step(0.05);
    let commands = rasterize_circle(Point::new(200.0, 300.0), 150.0, &config).unwrap();
    let transcript = render_transcript(commands);
    assert!(!transcript.is_empty());
    for token in transcript.lines() {
        let symbols: Vec<char> = token.chars().collect();
        assert_eq!(symbols.len(), 3);
        assert!("+-.".contains(symbols[0]));
        assert!("+-.".contains(symbols[1]));
        assert_eq!(symbols[2], '+');
    }
}

#[test]
fn test_replay_follows_drawn_line() {
    let config = RasterConfig::default().with_seam_mode(SeamMode::Carried);
    let (start, end) = (Point::new(120.0, 150.0), Point::new(260.0, 230.0));
    let commands: Vec<StepCommand> = rasterize_path([start, end], &config).unwrap().collect();

    let geometry = config.geometry().unwrap();
    let mut replayer = Replayer::new(lengths_from_point(geometry, start), &config).unwrap();
    let points = replayer.trace(commands).unwrap();
    assert!(!points.is_empty());

    let last = points.last().unwrap();
    assert!(last.distance_to(&end) < 0.5);

    // Spools lag a waypoint by at most one cart step of string.
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let length = dx.hypot(dy);
    for p in &points {
        let offset = ((p.x - start.x) * dy - (p.y - start.y) * dx).abs() / length;
        assert!(offset < 1.5, "{p} strays {offset} from the line");
    }
}

#[test]
fn test_partial_consumption_does_not_leak_state() {
    let config = RasterConfig::default();
    let (start, end) = (Point::new(50.0, 50.0), Point::new(300.0, 120.0));

    let mut first = rasterize_line(start, end, &config).unwrap();
    let _ = first.by_ref().take(10).count();
    drop(first);

    let full: Vec<StepCommand> = rasterize_line(start, end, &config).unwrap().collect();
    let again: Vec<StepCommand> = rasterize_line(start, end, &config).unwrap().collect();
    assert_eq!(full, again);
}
