use anyhow::{Error, Result};
use glow::HasContext;

pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.8, -0.8, 0.0, // Vertex 1
    0.8, -0.8, 0.0, // Vertex 2
    0.0, 0.8, 0.0, // Vertex 3
];

pub struct Mesh {
    pub vertex_array: glow::NativeVertexArray,
    pub vertex_buffer: glow::NativeBuffer,
    pub vertex_count: i32,
}

impl Mesh {
    pub fn triangle(gl: &glow::Context) -> Result<Self> {
        unsafe {
            let vertex_array = gl.create_vertex_array().map_err(Error::msg)?;
            gl.bind_vertex_array(Some(vertex_array));

            let vertex_buffer = gl.create_buffer().map_err(Error::msg)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&TRIANGLE_VERTICES),
                glow::STATIC_DRAW,
            );

            // Attribute 0: three tightly packed floats per vertex.
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 0, 0);

            gl.bind_vertex_array(None);

            Ok(Self {
                vertex_array,
                vertex_buffer,
                vertex_count: (TRIANGLE_VERTICES.len() / 3) as i32,
            })
        }
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
        }
    }

    pub fn cleanup(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.vertex_buffer);
            gl.delete_vertex_array(self.vertex_array);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_has_three_vertices() {
        assert_eq!(TRIANGLE_VERTICES.len() % 3, 0);
        assert_eq!(TRIANGLE_VERTICES.len() / 3, 3);
    }

    #[test]
    fn triangle_fits_in_clip_space() {
        for component in TRIANGLE_VERTICES {
            assert!((-1.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn triangle_winding_is_counter_clockwise() {
        let (x1, y1) = (TRIANGLE_VERTICES[0], TRIANGLE_VERTICES[1]);
        let (x2, y2) = (TRIANGLE_VERTICES[3], TRIANGLE_VERTICES[4]);
        let (x3, y3) = (TRIANGLE_VERTICES[6], TRIANGLE_VERTICES[7]);

        let cross = (x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1);
        assert!(cross > 0.0);
    }
}
