//! Programação dos registradores da USART sobre um bloco de memória falso.

use core::ptr::NonNull;

use sevlog::drivers::serial::{ControlB, ControlC, StatusA, Usart, REGISTER_SPAN};
use sevlog::{Channel, CharSink, LogError, Output, SinkError};

const F_CPU: u32 = 16_000_000;

const UCSRA: usize = 0;
const UCSRB: usize = 1;
const UCSRC: usize = 2;
const UBRRL: usize = 4;
const UBRRH: usize = 5;
const UDR: usize = 6;

fn read(base: NonNull<u8>, offset: usize) -> u8 {
    unsafe { base.as_ptr().add(offset).read_volatile() }
}

fn write(base: NonNull<u8>, offset: usize, value: u8) {
    unsafe { base.as_ptr().add(offset).write_volatile(value) }
}

#[test]
fn init_programs_divisor_and_frame() {
    let mut regs = [0u8; REGISTER_SPAN];
    let base = NonNull::new(regs.as_mut_ptr()).unwrap();
    let mut usart = unsafe { Usart::new(base, F_CPU) };

    usart.init(115_200);

    assert_eq!(read(base, UBRRL), 16);
    assert_eq!(read(base, UBRRH), 0);
    assert_eq!(StatusA::from_bits_retain(read(base, UCSRA)), StatusA::U2X);
    assert_eq!(read(base, UCSRC), ControlC::FRAME_8N1.bits());
    assert_eq!(
        ControlB::from_bits_retain(read(base, UCSRB)),
        ControlB::RXEN | ControlB::TXEN
    );
}

#[test]
fn slow_baud_uses_high_divisor_byte() {
    let mut regs = [0u8; REGISTER_SPAN];
    let base = NonNull::new(regs.as_mut_ptr()).unwrap();
    let mut usart = unsafe { Usart::new(base, F_CPU) };

    usart.init(300);

    assert_eq!(read(base, UBRRH), 0x0F);
    assert_eq!(read(base, UBRRL), 0xFF);
}

#[test]
fn put_char_writes_data_register_when_ready() {
    let mut regs = [0u8; REGISTER_SPAN];
    let base = NonNull::new(regs.as_mut_ptr()).unwrap();
    let mut usart = unsafe { Usart::new(base, F_CPU) };
    usart.init(9_600);

    assert!(!usart.is_ready());
    write(base, UCSRA, StatusA::UDRE.bits());
    assert!(usart.is_ready());

    assert_eq!(usart.put_char(b'Q'), Ok(()));
    assert_eq!(read(base, UDR), b'Q');
}

#[test]
fn channel_streams_formatted_bytes_into_data_register() {
    let mut regs = [0u8; REGISTER_SPAN];
    let base = NonNull::new(regs.as_mut_ptr()).unwrap();
    write(base, UCSRA, StatusA::UDRE.bits());
    write(base, UCSRB, ControlB::TXEN.bits());

    let channel = Channel::new(unsafe { Usart::new(base, F_CPU) });
    assert_eq!(channel.write_fmt(format_args!("hi {}", 7)), Ok(4));
    assert_eq!(read(base, UDR), b'7');
    assert_eq!(channel.lock().f_cpu(), F_CPU);
}

#[test]
fn put_char_before_init_is_not_ready() {
    let mut regs = [0u8; REGISTER_SPAN];
    let base = NonNull::new(regs.as_mut_ptr()).unwrap();
    write(base, UCSRA, StatusA::UDRE.bits());
    write(base, UDR, 0xAA);

    let mut usart = unsafe { Usart::new(base, F_CPU) };
    assert!(!usart.is_enabled());
    assert_eq!(usart.put_char(b'Q'), Err(SinkError::NotReady));
    assert_eq!(read(base, UDR), 0xAA);

    let channel = Channel::new(usart);
    assert_eq!(
        channel.write_fmt(format_args!("x")),
        Err(LogError::Sink(SinkError::NotReady))
    );
}
