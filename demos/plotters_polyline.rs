extern crate plotters;
use plotters::prelude::*;

use bernstein::{Bezier, Point, Point2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let bezier = Bezier::new(&[
        Point2::new(50.0, 300.0),
        Point2::new(150.0, 50.0),
        Point2::new(250.0, 350.0),
        Point2::new(350.0, 150.0),
    ])?;

    let to_tuple = |p: Point2<_>| (p.x() as f64, p.y() as f64);
    let control_points: Vec<(f64, f64)> = bezier.control_points().iter().copied().map(to_tuple).collect();
    let polyline: Vec<(f64, f64)> = bezier.polyline().into_iter().map(to_tuple).collect();

    let [(xmin, xmax), (ymin, ymax)] = bezier.bounding_box().ok_or("curve has no control points")?;
    let (xmin, xmax, ymin, ymax) = (xmin as f64, xmax as f64, ymin as f64, ymax as f64);

    let root = BitMapBackend::new("bezier_polyline.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart, a bit bigger than the bounding box
    let mut chart = ChartBuilder::on(&root)
        .caption("Cubic Bezier Polyline", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d((xmin - 20.0)..(xmax + 20.0), (ymin - 20.0)..(ymax + 20.0))?;

    chart.configure_mesh().draw()?;

    // draw the control points
    chart
        .draw_series(PointSeries::of_element(
            control_points.clone(),
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(
                        format!("{:?}", coord),
                        (0, 15),
                        ("sans-serif", 15).into_font(),
                    )
            },
        ))?
        .label("Control Points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the control polygon
    chart
        .draw_series(LineSeries::new(control_points, BLUE.mix(0.4)))?
        .label("Control Polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.4)));

    // draw the sampled curve
    chart
        .draw_series(LineSeries::new(polyline, &RED))?
        .label("B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    println!("arc length (approx): {:.3}", bezier.arclen(256));

    Ok(())
}
