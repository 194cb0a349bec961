// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Ownership of the on-chip peripherals.
//!
//! Every register block is represented by a zero-sized marker. The only safe
//! way to obtain markers is [`Peripherals::take`], which hands out the whole
//! set once. A marker derefs to its register block.

use core::marker::PhantomData;
use core::mem::size_of;
use core::ops::Deref;
use core::sync::atomic::{AtomicBool, Ordering};

use tock_registers::registers::ReadWrite;

use crate::errorcode::ErrorCode;
use crate::memory_map::{self, Bus, Window};
use crate::static_ref::StaticRef;
use crate::{
    adc, can, crc, dac, dbgmcu, dcmi, dma, dma2d, ethernet, exti, flash, fmc, gpio, i2c, iwdg,
    ltdc, pwr, rcc, rng, rtc, sai, sdio, signature, spi, syscfg, tim, usart, usb_otg, wwdg,
};

/// A register block with a fixed place in the address map.
pub trait Instance {
    type Registers: 'static;

    const NAME: &'static str;
    const BASE: usize;
    const BUS: Bus;
    /// Address range decoded by the instance.
    const WINDOW: Window =
        Window::new(Self::NAME, Self::BASE, size_of::<Self::Registers>(), Self::BUS);

    fn registers(&self) -> StaticRef<Self::Registers>;
}

macro_rules! peripherals {
    (
        $(
            $field:ident: $marker:ident($name:literal, $base:ident, $bus:ident $(, $size:expr)?)
                => $binding:path: $registers:ty;
        )*
    ) => {
        $(
            pub struct $marker {
                _marker: PhantomData<*const ()>,
            }

            unsafe impl Send for $marker {}

            impl Instance for $marker {
                type Registers = $registers;

                const NAME: &'static str = $name;
                const BASE: usize = memory_map::$base;
                const BUS: Bus = Bus::$bus;
                $(const WINDOW: Window = Window::new($name, memory_map::$base, $size, Bus::$bus);)?

                fn registers(&self) -> StaticRef<$registers> {
                    $binding
                }
            }

            impl Deref for $marker {
                type Target = $registers;

                fn deref(&self) -> &$registers {
                    &*$binding
                }
            }
        )*

        /// Every peripheral of the chip, each owned at most once.
        pub struct Peripherals {
            $(pub $field: $marker,)*
        }

        impl Peripherals {
            /// Hands out the peripherals the first time it is called and
            /// `None` afterwards.
            pub fn take() -> Option<Peripherals> {
                if TAKEN.swap(true, Ordering::AcqRel) {
                    None
                } else {
                    Some(unsafe { Peripherals::steal() })
                }
            }

            /// Creates the peripherals regardless of earlier calls.
            ///
            /// ## Safety
            ///
            /// The caller must not let two owners of the same marker access
            /// the register block concurrently.
            pub unsafe fn steal() -> Peripherals {
                TAKEN.store(true, Ordering::Release);
                Peripherals {
                    $($field: $marker { _marker: PhantomData },)*
                }
            }
        }

        /// Address ranges of every instance, in declaration order.
        pub const ROSTER: &[Window] = &[$(<$marker as Instance>::WINDOW,)*];
    };
}

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Controller registers followed by the eight stream blocks.
const DMA_WINDOW: usize = dma::STREAM_OFFSET + dma::STREAMS * size_of::<dma::DmaStreamRegisters>();
/// Controller registers followed by the shared filters.
const CAN1_WINDOW: usize = can::FILTER_OFFSET + size_of::<can::CanFilterRegisters>();

peripherals! {
    gpioa: Gpioa("GPIOA", GPIOA_BASE, Ahb1) => gpio::GPIOA: gpio::GpioRegisters;
    gpiob: Gpiob("GPIOB", GPIOB_BASE, Ahb1) => gpio::GPIOB: gpio::GpioRegisters;
    gpioc: Gpioc("GPIOC", GPIOC_BASE, Ahb1) => gpio::GPIOC: gpio::GpioRegisters;
    gpiod: Gpiod("GPIOD", GPIOD_BASE, Ahb1) => gpio::GPIOD: gpio::GpioRegisters;
    gpioe: Gpioe("GPIOE", GPIOE_BASE, Ahb1) => gpio::GPIOE: gpio::GpioRegisters;
    gpiof: Gpiof("GPIOF", GPIOF_BASE, Ahb1) => gpio::GPIOF: gpio::GpioRegisters;
    gpiog: Gpiog("GPIOG", GPIOG_BASE, Ahb1) => gpio::GPIOG: gpio::GpioRegisters;
    gpioh: Gpioh("GPIOH", GPIOH_BASE, Ahb1) => gpio::GPIOH: gpio::GpioRegisters;
    gpioi: Gpioi("GPIOI", GPIOI_BASE, Ahb1) => gpio::GPIOI: gpio::GpioRegisters;
    gpioj: Gpioj("GPIOJ", GPIOJ_BASE, Ahb1) => gpio::GPIOJ: gpio::GpioRegisters;
    gpiok: Gpiok("GPIOK", GPIOK_BASE, Ahb1) => gpio::GPIOK: gpio::GpioRegisters;
    crc: Crc("CRC", CRC_BASE, Ahb1) => crc::CRC: crc::CrcRegisters;
    rcc: Rcc("RCC", RCC_BASE, Ahb1) => rcc::RCC: rcc::RccRegisters;
    flash: Flash("FLASH", FLASH_R_BASE, Ahb1) => flash::FLASH: flash::FlashRegisters;
    dma1: Dma1("DMA1", DMA1_BASE, Ahb1, DMA_WINDOW) => dma::DMA1: dma::DmaRegisters;
    dma2: Dma2("DMA2", DMA2_BASE, Ahb1, DMA_WINDOW) => dma::DMA2: dma::DmaRegisters;
    eth_mac: EthMac("ETH_MAC", ETH_MAC_BASE, Ahb1) => ethernet::ETH_MAC: ethernet::EthMacRegisters;
    eth_mmc: EthMmc("ETH_MMC", ETH_MMC_BASE, Ahb1) => ethernet::ETH_MMC: ethernet::EthMmcRegisters;
    eth_ptp: EthPtp("ETH_PTP", ETH_PTP_BASE, Ahb1) => ethernet::ETH_PTP: ethernet::EthPtpRegisters;
    eth_dma: EthDma("ETH_DMA", ETH_DMA_BASE, Ahb1) => ethernet::ETH_DMA: ethernet::EthDmaRegisters;
    dma2d: Dma2d("DMA2D", DMA2D_BASE, Ahb1) => dma2d::DMA2D: dma2d::Dma2dRegisters;
    usb_otg_hs: UsbOtgHs("USB_OTG_HS", USB_OTG_HS_PERIPH_BASE, Ahb1, usb_otg::CORE_SIZE) =>
        usb_otg::OTG_HS: usb_otg::OtgGlobalRegisters;
    usb_otg_fs: UsbOtgFs("USB_OTG_FS", USB_OTG_FS_PERIPH_BASE, Ahb2, usb_otg::CORE_SIZE) =>
        usb_otg::OTG_FS: usb_otg::OtgGlobalRegisters;
    dcmi: Dcmi("DCMI", DCMI_BASE, Ahb2) => dcmi::DCMI: dcmi::DcmiRegisters;
    rng: Rng("RNG", RNG_BASE, Ahb2) => rng::RNG: rng::RngRegisters;
    fmc_bank1: FmcBank1("FMC_Bank1", FMC_BANK1_R_BASE, Ahb3) =>
        fmc::FMC_BANK1: fmc::FmcBank1Registers;
    fmc_bank1e: FmcBank1E("FMC_Bank1E", FMC_BANK1E_R_BASE, Ahb3) =>
        fmc::FMC_BANK1E: fmc::FmcBank1ERegisters;
    fmc_bank2_3: FmcBank2_3("FMC_Bank2_3", FMC_BANK2_3_R_BASE, Ahb3) =>
        fmc::FMC_BANK2_3: fmc::FmcBank2_3Registers;
    fmc_bank4: FmcBank4("FMC_Bank4", FMC_BANK4_R_BASE, Ahb3) =>
        fmc::FMC_BANK4: fmc::FmcBank4Registers;
    fmc_bank5_6: FmcBank5_6("FMC_Bank5_6", FMC_BANK5_6_R_BASE, Ahb3) =>
        fmc::FMC_BANK5_6: fmc::FmcBank5_6Registers;
    tim2: Tim2("TIM2", TIM2_BASE, Apb1) => tim::TIM2: tim::TimRegisters;
    tim3: Tim3("TIM3", TIM3_BASE, Apb1) => tim::TIM3: tim::TimRegisters;
    tim4: Tim4("TIM4", TIM4_BASE, Apb1) => tim::TIM4: tim::TimRegisters;
    tim5: Tim5("TIM5", TIM5_BASE, Apb1) => tim::TIM5: tim::TimRegisters;
    tim6: Tim6("TIM6", TIM6_BASE, Apb1) => tim::TIM6: tim::TimRegisters;
    tim7: Tim7("TIM7", TIM7_BASE, Apb1) => tim::TIM7: tim::TimRegisters;
    tim12: Tim12("TIM12", TIM12_BASE, Apb1) => tim::TIM12: tim::TimRegisters;
    tim13: Tim13("TIM13", TIM13_BASE, Apb1) => tim::TIM13: tim::TimRegisters;
    tim14: Tim14("TIM14", TIM14_BASE, Apb1) => tim::TIM14: tim::TimRegisters;
    rtc: Rtc("RTC", RTC_BASE, Apb1) => rtc::RTC: rtc::RtcRegisters;
    wwdg: Wwdg("WWDG", WWDG_BASE, Apb1) => wwdg::WWDG: wwdg::WwdgRegisters;
    iwdg: Iwdg("IWDG", IWDG_BASE, Apb1) => iwdg::IWDG: iwdg::IwdgRegisters;
    i2s2ext: I2s2Ext("I2S2ext", I2S2EXT_BASE, Apb1) => spi::I2S2EXT: spi::SpiRegisters;
    spi2: Spi2("SPI2", SPI2_BASE, Apb1) => spi::SPI2: spi::SpiRegisters;
    spi3: Spi3("SPI3", SPI3_BASE, Apb1) => spi::SPI3: spi::SpiRegisters;
    i2s3ext: I2s3Ext("I2S3ext", I2S3EXT_BASE, Apb1) => spi::I2S3EXT: spi::SpiRegisters;
    usart2: Usart2("USART2", USART2_BASE, Apb1) => usart::USART2: usart::UsartRegisters;
    usart3: Usart3("USART3", USART3_BASE, Apb1) => usart::USART3: usart::UsartRegisters;
    uart4: Uart4("UART4", UART4_BASE, Apb1) => usart::UART4: usart::UsartRegisters;
    uart5: Uart5("UART5", UART5_BASE, Apb1) => usart::UART5: usart::UsartRegisters;
    i2c1: I2c1("I2C1", I2C1_BASE, Apb1) => i2c::I2C1: i2c::I2cRegisters;
    i2c2: I2c2("I2C2", I2C2_BASE, Apb1) => i2c::I2C2: i2c::I2cRegisters;
    i2c3: I2c3("I2C3", I2C3_BASE, Apb1) => i2c::I2C3: i2c::I2cRegisters;
    can1: Can1("CAN1", CAN1_BASE, Apb1, CAN1_WINDOW) => can::CAN1: can::CanRegisters;
    can2: Can2("CAN2", CAN2_BASE, Apb1) => can::CAN2: can::CanRegisters;
    pwr: Pwr("PWR", PWR_BASE, Apb1) => pwr::PWR: pwr::PwrRegisters;
    dac: Dac("DAC", DAC_BASE, Apb1) => dac::DAC: dac::DacRegisters;
    uart7: Uart7("UART7", UART7_BASE, Apb1) => usart::UART7: usart::UsartRegisters;
    uart8: Uart8("UART8", UART8_BASE, Apb1) => usart::UART8: usart::UsartRegisters;
    tim1: Tim1("TIM1", TIM1_BASE, Apb2) => tim::TIM1: tim::TimRegisters;
    tim8: Tim8("TIM8", TIM8_BASE, Apb2) => tim::TIM8: tim::TimRegisters;
    usart1: Usart1("USART1", USART1_BASE, Apb2) => usart::USART1: usart::UsartRegisters;
    usart6: Usart6("USART6", USART6_BASE, Apb2) => usart::USART6: usart::UsartRegisters;
    adc1: Adc1("ADC1", ADC1_BASE, Apb2) => adc::ADC1: adc::AdcRegisters;
    adc2: Adc2("ADC2", ADC2_BASE, Apb2) => adc::ADC2: adc::AdcRegisters;
    adc3: Adc3("ADC3", ADC3_BASE, Apb2) => adc::ADC3: adc::AdcRegisters;
    adc_common: AdcCommon("ADC123_COMMON", ADC123_COMMON_BASE, Apb2) =>
        adc::ADC123_COMMON: adc::AdcCommonRegisters;
    sdio: Sdio("SDIO", SDIO_BASE, Apb2) => sdio::SDIO: sdio::SdioRegisters;
    spi1: Spi1("SPI1", SPI1_BASE, Apb2) => spi::SPI1: spi::SpiRegisters;
    spi4: Spi4("SPI4", SPI4_BASE, Apb2) => spi::SPI4: spi::SpiRegisters;
    syscfg: Syscfg("SYSCFG", SYSCFG_BASE, Apb2) => syscfg::SYSCFG: syscfg::SyscfgRegisters;
    exti: Exti("EXTI", EXTI_BASE, Apb2) => exti::EXTI: exti::ExtiRegisters;
    tim9: Tim9("TIM9", TIM9_BASE, Apb2) => tim::TIM9: tim::TimRegisters;
    tim10: Tim10("TIM10", TIM10_BASE, Apb2) => tim::TIM10: tim::TimRegisters;
    tim11: Tim11("TIM11", TIM11_BASE, Apb2) => tim::TIM11: tim::TimRegisters;
    spi5: Spi5("SPI5", SPI5_BASE, Apb2) => spi::SPI5: spi::SpiRegisters;
    spi6: Spi6("SPI6", SPI6_BASE, Apb2) => spi::SPI6: spi::SpiRegisters;
    sai1: Sai1("SAI1", SAI1_BASE, Apb2) => sai::SAI1: sai::SaiRegisters;
    sai1_block_a: Sai1BlockA("SAI1_Block_A", SAI1_BLOCK_A_BASE, Apb2) =>
        sai::SAI1_BLOCK_A: sai::SaiBlockRegisters;
    sai1_block_b: Sai1BlockB("SAI1_Block_B", SAI1_BLOCK_B_BASE, Apb2) =>
        sai::SAI1_BLOCK_B: sai::SaiBlockRegisters;
    ltdc: Ltdc("LTDC", LTDC_BASE, Apb2) => ltdc::LTDC: ltdc::LtdcRegisters;
    ltdc_layer1: LtdcLayer1("LTDC_Layer1", LTDC_LAYER1_BASE, Apb2) =>
        ltdc::LTDC_LAYER1: ltdc::LtdcLayerRegisters;
    ltdc_layer2: LtdcLayer2("LTDC_Layer2", LTDC_LAYER2_BASE, Apb2) =>
        ltdc::LTDC_LAYER2: ltdc::LtdcLayerRegisters;
    dbgmcu: Dbgmcu("DBGMCU", DBGMCU_BASE, Ppb) => dbgmcu::DBGMCU: dbgmcu::DbgmcuRegisters;
    uid: Uid("UID", UID_BASE, Ahb1) => signature::UID: signature::UidRegisters;
    flash_size: FlashSize("FLASHSIZE", FLASHSIZE_BASE, Ahb1) =>
        signature::FLASH_SIZE: signature::FlashSizeRegisters;
    package: Package("PACKAGE", PACKAGE_BASE, Ahb1) =>
        signature::PACKAGE: signature::PackageRegisters;
}

const _: () = assert!(memory_map::first_collision(ROSTER).is_none());

fn stream(
    streams: &[StaticRef<dma::DmaStreamRegisters>; dma::STREAMS],
    n: usize,
) -> Result<StaticRef<dma::DmaStreamRegisters>, ErrorCode> {
    streams.get(n).copied().ok_or(ErrorCode::INVAL)
}

impl Dma1 {
    pub fn stream(&self, n: usize) -> Result<StaticRef<dma::DmaStreamRegisters>, ErrorCode> {
        stream(&dma::DMA1_STREAMS, n)
    }
}

impl Dma2 {
    pub fn stream(&self, n: usize) -> Result<StaticRef<dma::DmaStreamRegisters>, ErrorCode> {
        stream(&dma::DMA2_STREAMS, n)
    }
}

impl Can1 {
    /// Filter banks shared with CAN2.
    pub fn filters(&self) -> StaticRef<can::CanFilterRegisters> {
        can::CAN_FILTER
    }
}

macro_rules! usb_otg_core {
    ($marker:ident, $core:expr) => {
        impl $marker {
            pub const CORE: usb_otg::UsbOtg = $core;

            pub fn host(&self) -> StaticRef<usb_otg::OtgHostRegisters> {
                Self::CORE.host()
            }

            pub fn host_port(&self) -> StaticRef<usb_otg::OtgHostPortRegisters> {
                Self::CORE.host_port()
            }

            pub fn host_channel(
                &self,
                channel: usize,
            ) -> Result<StaticRef<usb_otg::OtgHostChannelRegisters>, ErrorCode> {
                Self::CORE.host_channel(channel)
            }

            pub fn device(&self) -> StaticRef<usb_otg::OtgDeviceRegisters> {
                Self::CORE.device()
            }

            pub fn in_endpoint(
                &self,
                endpoint: usize,
            ) -> Result<StaticRef<usb_otg::OtgInEndpointRegisters>, ErrorCode> {
                Self::CORE.in_endpoint(endpoint)
            }

            pub fn out_endpoint(
                &self,
                endpoint: usize,
            ) -> Result<StaticRef<usb_otg::OtgOutEndpointRegisters>, ErrorCode> {
                Self::CORE.out_endpoint(endpoint)
            }

            pub fn power_clock(&self) -> StaticRef<usb_otg::OtgPowerClockRegisters> {
                Self::CORE.power_clock()
            }

            pub fn fifo(&self, n: usize) -> Result<StaticRef<ReadWrite<u32>>, ErrorCode> {
                Self::CORE.fifo(n)
            }
        }
    };
}

usb_otg_core!(UsbOtgFs, usb_otg::UsbOtg::Fs);
usb_otg_core!(UsbOtgHs, usb_otg::UsbOtg::Hs);

#[cfg(test)]
mod tests {
    use super::*;

    fn check<I: Instance + Deref<Target = <I as Instance>::Registers>>(instance: &I) {
        assert_eq!(instance.registers().address(), I::BASE, "{}", I::NAME);
        assert_eq!(I::WINDOW.base, I::BASE);
        assert!(core::ptr::eq(&**instance, &*instance.registers()));
    }

    // The only test that takes the peripherals, so the flag starts clear.
    #[test]
    fn take_once() {
        let p = Peripherals::take();
        assert!(p.is_some());
        assert!(Peripherals::take().is_none());
        let Some(p) = p else { return };
        check(&p.gpioa);
        check(&p.gpiob);
        check(&p.gpioc);
        check(&p.gpiod);
        check(&p.gpioe);
        check(&p.gpiof);
        check(&p.gpiog);
        check(&p.gpioh);
        check(&p.gpioi);
        check(&p.gpioj);
        check(&p.gpiok);
        check(&p.crc);
        check(&p.rcc);
        check(&p.flash);
        check(&p.dma1);
        check(&p.dma2);
        check(&p.eth_mac);
        check(&p.eth_mmc);
        check(&p.eth_ptp);
        check(&p.eth_dma);
        check(&p.dma2d);
        check(&p.usb_otg_hs);
        check(&p.usb_otg_fs);
        check(&p.dcmi);
        check(&p.rng);
        check(&p.fmc_bank1);
        check(&p.fmc_bank1e);
        check(&p.fmc_bank2_3);
        check(&p.fmc_bank4);
        check(&p.fmc_bank5_6);
        check(&p.tim2);
        check(&p.tim3);
        check(&p.tim4);
        check(&p.tim5);
        check(&p.tim6);
        check(&p.tim7);
        check(&p.tim12);
        check(&p.tim13);
        check(&p.tim14);
        check(&p.rtc);
        check(&p.wwdg);
        check(&p.iwdg);
        check(&p.i2s2ext);
        check(&p.spi2);
        check(&p.spi3);
        check(&p.i2s3ext);
        check(&p.usart2);
        check(&p.usart3);
        check(&p.uart4);
        check(&p.uart5);
        check(&p.i2c1);
        check(&p.i2c2);
        check(&p.i2c3);
        check(&p.can1);
        check(&p.can2);
        check(&p.pwr);
        check(&p.dac);
        check(&p.uart7);
        check(&p.uart8);
        check(&p.tim1);
        check(&p.tim8);
        check(&p.usart1);
        check(&p.usart6);
        check(&p.adc1);
        check(&p.adc2);
        check(&p.adc3);
        check(&p.adc_common);
        check(&p.sdio);
        check(&p.spi1);
        check(&p.spi4);
        check(&p.syscfg);
        check(&p.exti);
        check(&p.tim9);
        check(&p.tim10);
        check(&p.tim11);
        check(&p.spi5);
        check(&p.spi6);
        check(&p.sai1);
        check(&p.sai1_block_a);
        check(&p.sai1_block_b);
        check(&p.ltdc);
        check(&p.ltdc_layer1);
        check(&p.ltdc_layer2);
        check(&p.dbgmcu);
        check(&p.uid);
        check(&p.flash_size);
        check(&p.package);

        assert_eq!(p.dma2.stream(7).map(|s| s.address()), Ok(0x4002_64B8));
        assert_eq!(p.dma1.stream(8).map(|s| s.address()), Err(ErrorCode::INVAL));
        assert_eq!(p.usb_otg_fs.host_channel(7).map(|r| r.address()), Ok(0x5000_05E0));
        assert!(p.usb_otg_fs.in_endpoint(4).is_err());
        assert_eq!(p.usb_otg_hs.out_endpoint(5).map(|r| r.address()), Ok(0x4004_0BA0));
        assert_eq!(p.usb_otg_hs.fifo(0).map(|r| r.address()), Ok(0x4004_1000));
        assert_eq!(p.usb_otg_hs.device().address(), 0x4004_0800);
        assert_eq!(UsbOtgFs::CORE.host_channels(), 8);
        assert_eq!(p.can1.filters().address(), 0x4000_6600);
        assert_eq!(Can1::WINDOW.size, 0x320);
        assert_eq!(Can2::WINDOW.size, 0x200);
    }

    #[test]
    fn roster_matches_families() {
        assert_eq!(ROSTER.len(), 87);
        assert!(memory_map::first_collision(ROSTER).is_none());
        for port in gpio::Port::ALL {
            assert!(ROSTER.iter().any(|w| w.base == port.base() && w.name == port.name()));
        }
        for timer in tim::Tim::ALL {
            assert!(ROSTER.iter().any(|w| w.base == timer.base() && w.name == timer.name()));
        }
        for serial in usart::Usart::ALL {
            assert!(ROSTER.iter().any(|w| w.base == serial.base() && w.name == serial.name()));
        }
        for core in usb_otg::UsbOtg::ALL {
            assert!(ROSTER.iter().any(|w| w.base == core.base() && w.size == usb_otg::CORE_SIZE));
        }
    }

    #[test]
    fn roster_avoids_memories() {
        for region in memory_map::MEMORY_REGIONS.iter() {
            for window in ROSTER {
                assert!(!region.overlaps(window), "{window} overlaps {region}");
            }
        }
    }

    #[test]
    fn bus_domains() {
        assert_eq!(<Gpiok as Instance>::BUS, Bus::Ahb1);
        assert_eq!(<Rng as Instance>::BUS, Bus::Ahb2);
        assert_eq!(<FmcBank5_6 as Instance>::BUS, Bus::Ahb3);
        assert_eq!(<Uart8 as Instance>::BUS, Bus::Apb1);
        assert_eq!(<LtdcLayer2 as Instance>::BUS, Bus::Apb2);
        assert_eq!(<Dbgmcu as Instance>::BUS, Bus::Ppb);
        for window in ROSTER {
            let expected = match window.base {
                0x4000_0000..=0x4000_FFFF => Bus::Apb1,
                0x4001_0000..=0x4001_FFFF => Bus::Apb2,
                0x4002_0000..=0x4007_FFFF => Bus::Ahb1,
                0x5000_0000..=0x5006_0BFF => Bus::Ahb2,
                0xA000_0000..=0xA000_0FFF => Bus::Ahb3,
                0xE000_0000..=0xE00F_FFFF => Bus::Ppb,
                _ => continue,
            };
            assert_eq!(window.bus, expected, "{window}");
        }
    }
}
