use gridsketch::{Graph, Point};
use std::time::Instant;

fn build_grid_graph(lines_target: usize) -> Graph {
    let mut g = Graph::new();
    // Rows of points two cells apart, joined horizontally until ~lines_target
    let w = 120usize; let h = 120usize;
    let mut ids = Vec::with_capacity(w*h);
    for j in 0..h { for i in 0..w { ids.push(g.ensure_point(Point::new(i as f32 * 2.0, j as f32 * 2.0))); } }
    let mut count = 0usize;
    'outer: for j in 0..h { for i in 0..(w-1) { g.add_line(ids[j*w+i], ids[j*w+i+1]); count+=1; if count>=lines_target { break 'outer; } } }
    g
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut lines = 2000usize;
    let mut queries = 10000usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--lines=") { if let Ok(v)=val.parse() { lines=v; } }
        else if let Some(val)=a.strip_prefix("--queries=") { if let Ok(v)=val.parse() { queries=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let g = build_grid_graph(lines);

    // Query cell midpoints along the rows, which hit lines, and odd rows, which miss
    let mut times_ms: Vec<f64> = Vec::with_capacity(queries);
    let start_all = Instant::now();
    let mut line_hits = 0usize;
    let mut point_hits = 0usize;
    for k in 0..queries {
        let at = Point::new((k % 100) as f32 * 2.0 + 1.0, ((k/100) % 100) as f32);
        let t0 = Instant::now();
        if g.hover_line(at).is_some() { line_hits += 1; }
        if g.hover_point(at, None).is_some() { point_hits += 1; }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("points={} lines={} queries={} line_hits={} point_hits={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}",
        g.point_count(), g.line_count(), queries, line_hits, point_hits, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
