//! End-to-end kernel generation tests.
//!
//! These tests drive the full path a generator takes:
//! tagged operands → dispatch → kernel name + parameter list → indented source

use lagen_codegen::{
    DispatchError, KernelStream, NumericTypeName, StreamConfig, dispatch_family, dispatch_matrix,
    element_count, numeric_type_name, row_count,
};
use lagen_foundation::{
    ColumnMajor, ElementType, Family, Matrix, MatrixLayout, ParamId, RowMajor, Scalar,
    SymbolicMatrix, SymbolicVector, TaggedElement, Vector,
};
use lagen_tests::{KernelHarness, init_tracing};

/// `x = y * a` over float vectors.
#[test]
fn test_vector_scale_kernel() {
    let harness = KernelHarness::new();
    let x = Vector::filled(8, 0.0f32);
    let y = Vector::filled(8, 1.0f32);

    let kernel = harness
        .generate_elementwise(
            "assign",
            &[(&x).into(), (&y).into(), 2.0f32.into()],
            |src| format!("{} * {}", src[0], src[1]),
        )
        .unwrap();

    assert_eq!(kernel.name, "assign_vf_vf_hf");
    assert_eq!(
        kernel.source,
        "__kernel void assign_vf_vf_hf(__global float* arg0, __global float* arg1, float arg2) {\n\
         \x20   const uint i = get_global_id(0);\n\
         \x20   if (i < 8) {\n\
         \x20       arg0[i] = arg1[i] * arg2;\n\
         \x20   }\n\
         }\n"
    );
}

/// Kernels over the same shapes with different precision or layout must
/// not collide in a kernel cache.
#[test]
fn test_matrix_kernels_are_distinct_per_layout_and_precision() {
    let harness = KernelHarness::new();
    let mrf = Matrix::<f32, RowMajor>::filled(3, 5, 0.0);
    let mcf = Matrix::<f32, ColumnMajor>::filled(3, 5, 0.0);
    let mcd = Matrix::<f64, ColumnMajor>::filled(3, 5, 0.0);
    let a = Scalar::new(0.5f64);

    let row = harness
        .generate_elementwise("fill", &[(&mrf).into(), 1.0f32.into()], |s| s[0].clone())
        .unwrap();
    let col = harness
        .generate_elementwise("fill", &[(&mcf).into(), 1.0f32.into()], |s| s[0].clone())
        .unwrap();
    let dbl = harness
        .generate_elementwise("fill", &[(&mcd).into(), (&a).into()], |s| s[0].clone())
        .unwrap();

    assert_eq!(row.name, "fill_mfr_hf");
    assert_eq!(col.name, "fill_mfc_hf");
    assert_eq!(dbl.name, "fill_mdc_sd");
    assert!(row.source.contains("if (i < 15)"));
    assert!(dbl.source.contains("__global double* arg1"));
    assert!(dbl.source.contains("arg0[i] = arg1[0];"));
}

#[test]
fn test_symbolic_operands_use_parameter_slots() {
    let harness = KernelHarness::new();
    let out = SymbolicVector::<f64>::new(ParamId::new(0));
    let lhs = SymbolicMatrix::<f64>::new(ParamId::new(1), MatrixLayout::RowMajor);

    let kernel = harness
        .generate_elementwise("copy", &[(&out).into(), (&lhs).into()], |s| s[0].clone())
        .unwrap();

    assert_eq!(kernel.name, "copy_vd_mdr");
    // No concrete operand, so no bounds guard.
    assert_eq!(
        kernel.source,
        "__kernel void copy_vd_mdr(__global double* p0, __global double* p1) {\n\
         \x20   const uint i = get_global_id(0);\n\
         \x20   p0[i] = p1[i];\n\
         }\n"
    );
}

#[test]
fn test_custom_indent_unit() {
    let harness = KernelHarness::with_config(StreamConfig {
        indent_unit: "\t".to_string(),
        ..StreamConfig::default()
    });
    let v = Vector::filled(2, 0.0f64);

    let kernel = harness
        .generate_elementwise("zero", &[(&v).into(), 0.0f64.into()], |s| s[0].clone())
        .unwrap();
    assert!(kernel.source.contains("\n\t\targ0[i] = arg1;\n\t}\n"));
}

#[test]
fn test_vector_length_and_matrix_router() {
    init_tracing();
    let v = Vector::from_vec(vec![1.0f32, 2.0, 3.0, 4.0]);
    let element = TaggedElement::from(&v);

    assert_eq!(element_count(ElementType::VectorFloat, element).unwrap(), 4);
    assert_eq!(
        row_count(ElementType::VectorFloat, element),
        Err(DispatchError::UnsupportedElementType {
            router: "matrix",
            element_type: ElementType::VectorFloat,
        })
    );
}

#[test]
fn test_inconsistent_tags_abort_generation() {
    init_tracing();
    let v = Vector::filled(4, 0.0f32);

    let err = dispatch_family(
        Family::Vector,
        ElementType::VectorDouble,
        (&v).into(),
        &NumericTypeName,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DispatchError::PayloadMismatch {
            declared: ElementType::VectorDouble,
            actual: ElementType::VectorFloat,
        }
    );
    assert!(
        numeric_type_name(Family::CompositeOperation, ElementType::CompositeOperation, (&v).into())
            .is_err()
    );
}

#[test]
fn test_matrix_router_serves_both_layouts() {
    init_tracing();
    let row = Matrix::<f64, RowMajor>::from_fn(2, 3, |r, c| (r * 3 + c) as f64);
    let col = Matrix::<f64, ColumnMajor>::from_fn(2, 3, |r, c| (r * 3 + c) as f64);

    struct Corner;
    impl lagen_codegen::Operation for Corner {
        type Output = f64;
    }
    impl lagen_codegen::MatrixOp for Corner {
        fn matrix<T: lagen_codegen::Numeric, L: lagen_codegen::LayoutTag>(
            &self,
            matrix: &Matrix<T, L>,
        ) -> f64 {
            matrix.get(matrix.rows() - 1, matrix.cols() - 1).into()
        }
    }

    assert_eq!(
        dispatch_matrix(ElementType::MatrixRowDouble, (&row).into(), &Corner).unwrap(),
        5.0
    );
    assert_eq!(
        dispatch_matrix(ElementType::MatrixColDouble, (&col).into(), &Corner).unwrap(),
        5.0
    );
}

#[test]
fn test_hand_written_kernel_nesting() {
    use std::fmt::Write;

    init_tracing();
    let mut out = KernelStream::new();
    writeln!(out, "// generated").unwrap();
    out.open_block("__kernel void gemv(__global const float* A, __global float* y)");
    out.open_block("for (uint k = 0; k < 4; ++k)");
    out.open_block("if (k % 2 == 0)");
    writeln!(out, "y[k] = A[k];").unwrap();
    out.close_block();
    out.close_block();
    writeln!(out).unwrap();
    writeln!(out, "barrier(CLK_GLOBAL_MEM_FENCE);").unwrap();
    out.close_block();

    assert_eq!(out.indent_level(), 0);
    let source = out.into_contents();
    let lines: Vec<&str> = source.lines().collect();
    assert_eq!(lines[0], "// generated");
    assert_eq!(lines[3], "        if (k % 2 == 0) {");
    assert_eq!(lines[4], "            y[k] = A[k];");
    assert_eq!(lines[7], "");
    assert_eq!(lines[8], "    barrier(CLK_GLOBAL_MEM_FENCE);");
    assert_eq!(lines[9], "}");
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_config_loads_from_json() {
    let config: StreamConfig =
        serde_json::from_str(r#"{ "indent_unit": "  ", "indent_blank_lines": false }"#).unwrap();
    let harness = KernelHarness::with_config(config);
    let v = Vector::filled(1, 0.0f32);

    let kernel = harness
        .generate_elementwise("id", &[(&v).into()], |_| "0.0f".to_string())
        .unwrap();
    assert!(kernel.source.contains("\n  const uint i"));
    assert!(kernel.source.contains("\n    arg0[i] = 0.0f;"));
}
