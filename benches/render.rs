use criterion::{black_box, criterion_group, criterion_main, Criterion};
use declgen::generator::DeclarationRenderer;
use declgen::resolver::RegistryResolver;
use declgen::spec::{ClassSpec, FieldSpec, MethodSpec, ParamKeyword, ParameterSpec, Visibility};

fn sample_spec(fields: usize) -> ClassSpec {
    ClassSpec {
        name: "Benchmark Target".to_string(),
        fields: (0..fields)
            .map(|i| FieldSpec {
                name: format!("field {}", i),
                type_name: "int".to_string(),
                visibility: Visibility::Private,
            })
            .collect(),
        methods: vec![MethodSpec {
            name: "Apply".to_string(),
            return_type_name: "void".to_string(),
            parameters: vec![
                ParameterSpec {
                    name: "target".to_string(),
                    type_name: "ItemData".to_string(),
                    keyword: ParamKeyword::Ref,
                },
                ParameterSpec {
                    name: "amount".to_string(),
                    type_name: "int".to_string(),
                    keyword: ParamKeyword::None,
                },
            ],
            visibility: Visibility::Public,
        }],
    }
}

fn bench_render(c: &mut Criterion) {
    let resolver = RegistryResolver::new();
    resolver.register("ScriptableObject");
    resolver.register_subtype("ItemData", "ScriptableObject");

    let renderer = DeclarationRenderer::new().with_base_class("ScriptableObject");
    let spec = sample_spec(50);

    c.bench_function("render_50_fields", |b| {
        b.iter(|| renderer.render(black_box(&spec), &resolver));
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
