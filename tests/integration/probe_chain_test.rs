use super::support::ScriptedRunner;
use ohmygpu::platform::gpu::{
    AmdProbe, GpuProbe, IntegratedProbe, NvidiaProbe, NVIDIA_SMI, NVIDIA_SMI_ARGS, ROCM_SMI,
    ROCM_SMI_ARGS, WMIC, WMIC_ARGS,
};
use ohmygpu::{CommandOutput, GpuInfo, ProbeChain};

fn amd_listing() -> CommandOutput {
    CommandOutput::ok(
        "============ ROCm System Management Interface ============\n\
         GPU[0]\t\t: Device ID: 0x744c\n\
         GPU[0]\t\t: Temperature (Sensor edge) (C): 38.0\n",
    )
}

fn intel_listing() -> CommandOutput {
    CommandOutput::ok("Name\r\r\nIntel(R) Iris(R) Xe Graphics\r\r\n\r\r\n")
}

#[test]
fn test_nvidia_wins_and_stops_the_chain() {
    let runner = ScriptedRunner::new()
        .with(
            NVIDIA_SMI,
            CommandOutput::ok("NVIDIA GeForce RTX 3080, 10240 MiB, 1536 MiB, 12 %\n"),
        )
        .with(ROCM_SMI, amd_listing())
        .with(WMIC, intel_listing());

    let info = ProbeChain::windows_default().detect(&runner).unwrap();

    assert_eq!(
        info,
        GpuInfo::new("NVIDIA GeForce RTX 3080", "10240 MiB", "1536 MiB", "12 %")
    );
    assert_eq!(runner.programs(), vec![NVIDIA_SMI.to_string()]);
}

#[test]
fn test_nvidia_invocation_contract() {
    let runner = ScriptedRunner::new().with(NVIDIA_SMI, CommandOutput::ok("a, b, c, d"));

    let _ = NvidiaProbe.probe(&runner);

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "nvidia-smi");
    assert_eq!(
        calls[0].1,
        vec![
            "--query-gpu=name,memory.total,memory.used,utilization.gpu".to_string(),
            "--format=csv,noheader".to_string(),
        ]
    );
    assert_eq!(NVIDIA_SMI_ARGS.len(), 2);
}

#[test]
fn test_nvidia_short_output_falls_through_to_amd() {
    let runner = ScriptedRunner::new()
        .with(NVIDIA_SMI, CommandOutput::ok("No devices were found"))
        .with(ROCM_SMI, amd_listing());

    let info = ProbeChain::windows_default().detect(&runner).unwrap();

    assert_eq!(info, GpuInfo::new("AMD Radeon GPU", "N/A", "N/A", "N/A"));
    assert_eq!(
        runner.programs(),
        vec![NVIDIA_SMI.to_string(), ROCM_SMI.to_string()]
    );
}

#[test]
fn test_nvidia_failed_exit_is_ignored_even_with_valid_output() {
    let failed = CommandOutput {
        success: false,
        stdout: "NVIDIA GeForce RTX 3080, 10240 MiB, 1536 MiB, 12 %".to_string(),
        stderr: String::new(),
    };
    let runner = ScriptedRunner::new().with(NVIDIA_SMI, failed);

    assert!(NvidiaProbe.probe(&runner).is_none());
}

#[test]
fn test_amd_detected_when_nvidia_missing() {
    let runner = ScriptedRunner::new()
        .with(ROCM_SMI, amd_listing())
        .with(WMIC, intel_listing());

    let info = ProbeChain::windows_default().detect(&runner).unwrap();

    assert_eq!(info, GpuInfo::new("AMD Radeon GPU", "N/A", "N/A", "N/A"));
    assert_eq!(runner.count(WMIC), 0);

    let calls = runner.calls();
    assert_eq!(calls[1].1, ROCM_SMI_ARGS.map(String::from).to_vec());
}

#[test]
fn test_amd_reads_stderr_too() {
    let output = CommandOutput {
        success: true,
        stdout: String::new(),
        stderr: "WARNING: GPU[0] sensor unavailable\n".to_string(),
    };
    let runner = ScriptedRunner::new().with(ROCM_SMI, output);

    assert_eq!(
        AmdProbe.probe(&runner),
        Some(GpuInfo::placeholder("AMD Radeon GPU"))
    );
}

#[test]
fn test_amd_failed_exit_is_absent() {
    let runner = ScriptedRunner::new().with(ROCM_SMI, CommandOutput::failed("GPU driver error"));
    assert!(AmdProbe.probe(&runner).is_none());
}

#[test]
fn test_integrated_detected_last() {
    let runner = ScriptedRunner::new()
        .with(NVIDIA_SMI, CommandOutput::failed("NVIDIA-SMI has failed"))
        .with(ROCM_SMI, CommandOutput::ok("No AMD devices\n"))
        .with(WMIC, intel_listing());

    let info = ProbeChain::windows_default().detect(&runner).unwrap();

    assert_eq!(
        info,
        GpuInfo::new("Intel Integrated GPU", "N/A", "N/A", "N/A")
    );
    assert_eq!(
        runner.programs(),
        vec![
            NVIDIA_SMI.to_string(),
            ROCM_SMI.to_string(),
            WMIC.to_string()
        ]
    );

    let calls = runner.calls();
    assert_eq!(calls[2].1, WMIC_ARGS.map(String::from).to_vec());
}

#[test]
fn test_integrated_non_intel_is_absent() {
    let runner = ScriptedRunner::new().with(
        WMIC,
        CommandOutput::ok("Name\r\r\nAMD Radeon(TM) Graphics\r\r\n"),
    );
    assert!(IntegratedProbe.probe(&runner).is_none());
}

#[test]
fn test_nothing_detected_runs_each_probe_once() {
    let runner = ScriptedRunner::new();

    assert!(ProbeChain::windows_default().detect(&runner).is_none());
    assert_eq!(runner.count(NVIDIA_SMI), 1);
    assert_eq!(runner.count(ROCM_SMI), 1);
    assert_eq!(runner.count(WMIC), 1);
}
