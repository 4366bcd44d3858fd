use std::{
    marker::PhantomData,
    rc::Rc,
};

use bytemuck::Pod;

use super::{AttributeDesc, Device, HalError};

/// Vertex buffer plus the vertex-array state describing its layout.
///
/// Filled once at creation and never written again.
pub struct VertexBufferState<D: Device, I> {
    device: Rc<D>,
    pub vertex_array: Option<D::VertexArray>,
    pub buffer: Option<D::Buffer>,
    pub count: usize,
    _phantom_data: PhantomData<I>,
}

impl<D: Device, I: Pod> VertexBufferState<D, I> {
    pub fn new_from_items(
        device: Rc<D>,
        items: &[I],
        attributes: &[AttributeDesc],
    ) -> Result<VertexBufferState<D, I>, HalError> {
        let mut state = VertexBufferState {
            device,
            vertex_array: None,
            buffer: None,
            count: items.len(),
            _phantom_data: PhantomData,
        };
        let device = state.device.clone();

        let vertex_array = device.create_vertex_array()?;
        state.vertex_array = Some(vertex_array);
        device.bind_vertex_array(Some(vertex_array));

        let buffer = device.create_buffer()?;
        state.buffer = Some(buffer);
        device.bind_array_buffer(Some(buffer));
        device.array_buffer_data(bytemuck::cast_slice(items));

        let stride = std::mem::size_of::<I>();
        for &attribute in attributes {
            device.vertex_attrib_pointer_f32(attribute, stride);
            device.enable_vertex_attrib_array(attribute.location);
        }

        // the vertex array keeps the buffer binding recorded by the pointers
        device.bind_array_buffer(None);
        device.bind_vertex_array(None);
        Ok(state)
    }

    pub fn bind(&self) {
        self.device.bind_vertex_array(self.vertex_array);
    }
}

impl<D: Device, I> Drop for VertexBufferState<D, I> {
    fn drop(&mut self) {
        if let Some(vertex_array) = self.vertex_array.take() {
            self.device.delete_vertex_array(vertex_array);
        }
        if let Some(buffer) = self.buffer.take() {
            self.device.delete_buffer(buffer);
        }
    }
}
