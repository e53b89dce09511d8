use wgpu::{BindGroup, BindGroupDescriptor, BindGroupLayoutDescriptor, Device, RenderPipeline, ShaderStages, TextureFormat};
use voxel_common::gpu_buffer::GPUBuffer;
use voxel_common::wgpu_state::{DisplayError, WgpuState};

/// Draws the uploaded pixel buffer as a full screen quad.
pub struct DisplayKernel {
    display_bind_group: BindGroup,
    pipeline: RenderPipeline,
}

impl DisplayKernel {
    pub fn new(device: &Device,
               image_buffer: &GPUBuffer,
               frame_buffer: &GPUBuffer,
               format: TextureFormat) -> Self {
        let shader = device.create_shader_module(
            wgpu::include_wgsl!("../../voxel_common/shaders/display_shader.wgsl")
        );

        // the image and frame buffers, nothing else is needed to draw
        let display_bind_group_layout = device.create_bind_group_layout(
            &BindGroupLayoutDescriptor {
                label: Some("display bind group layout"),
                entries: &[
                    image_buffer.layout(ShaderStages::FRAGMENT, true),
                    frame_buffer.layout(ShaderStages::FRAGMENT, true),
                ],
            }
        );

        let display_bind_group = device.create_bind_group(
            &BindGroupDescriptor {
                label: Some("display bind group"),
                layout: &display_bind_group_layout,
                entries: &[
                    image_buffer.binding(),
                    frame_buffer.binding(),
                ],
            }
        );

        let display_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("display pipeline layout"),
                bind_group_layouts: &[&display_bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("display pipeline"),
            layout: Some(&display_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs",
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs",
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Cw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            display_bind_group,
            pipeline,
        }
    }

    // acquire the next surface texture, draw the quad into it and present
    pub fn run(&self, wgpu_state: &WgpuState) -> Result<(), DisplayError> {
        let output = wgpu_state.surface().get_current_texture()?;
        let view = output.texture.create_view(
            &wgpu::TextureViewDescriptor::default());

        let mut encoder = wgpu_state.device().create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("display kernel encoder"),
            });

        {
            let mut display_pass = encoder.begin_render_pass(
                &wgpu::RenderPassDescriptor {
                    label: Some("display render pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });
            display_pass.set_pipeline(&self.pipeline);
            display_pass.set_bind_group(0, &self.display_bind_group, &[]);
            display_pass.draw(0..6, 0..1);
        }
        wgpu_state.queue().submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
