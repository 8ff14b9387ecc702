use crate::types::Vertex;

/// Append one axis-aligned box as 12 triangles with face normals
fn push_box(vertices: &mut Vec<Vertex>, min: [f32; 3], max: [f32; 3], color: [f32; 3]) {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;

    // (normal, four corners in fan order) per face
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]],
        ),
        (
            [0.0, 1.0, 0.0],
            [[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]],
        ),
    ];

    for (normal, corners) in faces {
        for indices in [[0, 1, 2], [0, 2, 3]] {
            for i in indices {
                vertices.push(Vertex::new(corners[i], normal, color));
            }
        }
    }
}

/// Static demo geometry: a ground plane plus a grid of colored boxes,
/// enough to make camera motion and the projection switch legible.
pub fn create_demo_scene() -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // Ground plane
    push_box(
        &mut vertices,
        [-30.0, -1.0, -30.0],
        [30.0, -0.9, 30.0],
        [0.3, 0.3, 0.3],
    );

    // Grid of boxes with position-derived colors
    for x in -5..5 {
        for z in -5..5 {
            let fx = x as f32 * 4.0;
            let fz = z as f32 * 4.0 - 10.0;
            let height = 0.5 + ((x + z + 10) % 5) as f32 * 0.8;

            let color = [
                (x + 5) as f32 / 10.0 * 0.8 + 0.2,
                (z + 5) as f32 / 10.0 * 0.8 + 0.2,
                0.6,
            ];

            push_box(
                &mut vertices,
                [fx - 0.8, -0.9, fz - 0.8],
                [fx + 0.8, -0.9 + height, fz + 0.8],
                color,
            );
        }
    }

    log::info!("demo scene: {} vertices", vertices.len());
    vertices
}
