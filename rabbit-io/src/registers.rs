//! Internal I/O register addresses of the Rabbit 4000/5000/6000 family.
//!
//! Names are the mnemonics used in the Rabbit user manuals; addresses are
//! internal I/O space offsets (the `ioi` space), without the high bit the
//! triplet format uses to tag register writes.

pub static IO_REGISTERS: &[(&str, u16)] = &[
    ("GCSR", 0x0000),
    ("RTCCR", 0x0001),
    ("RTC0R", 0x0002),
    ("RTC1R", 0x0003),
    ("RTC2R", 0x0004),
    ("RTC3R", 0x0005),
    ("RTC4R", 0x0006),
    ("RTC5R", 0x0007),
    ("WDTCR", 0x0008),
    ("WDTTR", 0x0009),
    ("GCM0R", 0x000A),
    ("GCM1R", 0x000B),
    ("GPSCR", 0x000D),
    ("GOCR", 0x000E),
    ("GCDR", 0x000F),

    ("MMIDR", 0x0010),
    ("STACKSEG", 0x0011),
    ("STACKSEGL", 0x001A),
    ("STACKSEGH", 0x001B),
    ("DATASEG", 0x0012),
    ("DATASEGL", 0x001E),
    ("DATASEGH", 0x001F),
    ("SEGSIZE", 0x0013),
    ("MB0CR", 0x0014),
    ("MB1CR", 0x0015),
    ("MB2CR", 0x0016),
    ("MB3CR", 0x0017),
    ("MECR", 0x0018),
    ("MTCR", 0x0019),
    ("BDCR", 0x001C),

    ("SPD0R", 0x0020),
    ("SPD1R", 0x0021),
    ("SPD2R", 0x0022),
    ("SPSR", 0x0023),
    ("SPCR", 0x0024),
    ("GROM", 0x002C),
    ("GRAM", 0x002D),
    ("GCPU", 0x002E),
    ("GREV", 0x002F),

    ("PADR", 0x0030),

    ("PBDR", 0x0040),
    ("PBDDR", 0x0047),

    ("PCDR", 0x0050),
    ("PCFR", 0x0055),

    ("ICCSR", 0x0056),
    ("ICCR", 0x0057),
    ("ICT1R", 0x0058),
    ("ICS1R", 0x0059),
    ("ICL1R", 0x005A),
    ("ICM1R", 0x005B),
    ("ICT2R", 0x005C),
    ("ICS2R", 0x005D),
    ("ICL2R", 0x005E),
    ("ICM2R", 0x005F),

    ("PDDR", 0x0060),
    ("PDCR", 0x0064),
    ("PDFR", 0x0065),
    ("PDDCR", 0x0066),
    ("PDDDR", 0x0067),
    ("PDB0R", 0x0068),
    ("PDB1R", 0x0069),
    ("PDB2R", 0x006A),
    ("PDB3R", 0x006B),
    ("PDB4R", 0x006C),
    ("PDB5R", 0x006D),
    ("PDB6R", 0x006E),
    ("PDB7R", 0x006F),

    ("PEDR", 0x0070),
    ("PECR", 0x0074),
    ("PEFR", 0x0075),
    ("PEDDR", 0x0077),
    ("PEB0R", 0x0078),
    ("PEB1R", 0x0079),
    ("PEB2R", 0x007A),
    ("PEB3R", 0x007B),
    ("PEB4R", 0x007C),
    ("PEB5R", 0x007D),
    ("PEB6R", 0x007E),
    ("PEB7R", 0x007F),

    ("IB0CR", 0x0080),
    ("IB1CR", 0x0081),
    ("IB2CR", 0x0082),
    ("IB3CR", 0x0083),
    ("IB4CR", 0x0084),
    ("IB5CR", 0x0085),
    ("IB6CR", 0x0086),
    ("IB7CR", 0x0087),

    ("PWL0R", 0x0088),
    ("PWM0R", 0x0089),
    ("PWL1R", 0x008A),
    ("PWM1R", 0x008B),
    ("PWL2R", 0x008C),
    ("PWM2R", 0x008D),
    ("PWL3R", 0x008E),
    ("PWM3R", 0x008F),

    ("QDCSR", 0x0090),
    ("QDCR", 0x0091),
    ("QDC1R", 0x0094),
    ("QDC1HR", 0x0095),
    ("QDC2R", 0x0096),
    ("QDC2HR", 0x0097),

    ("I0CR", 0x0098),
    ("I1CR", 0x0099),

    ("TACSR", 0x00A0),
    ("TAPR", 0x00A1),
    ("TAT1R", 0x00A3),
    ("TACR", 0x00A4),
    ("TAT2R", 0x00A5),
    ("TAT8R", 0x00A6),
    ("TAT3R", 0x00A7),
    ("TAT9R", 0x00A8),
    ("TAT4R", 0x00A9),
    ("TAT10R", 0x00AA),
    ("TAT5R", 0x00AB),
    ("TAT6R", 0x00AD),
    ("TAT7R", 0x00AF),

    ("TBCSR", 0x00B0),
    ("TBCR", 0x00B1),
    ("TBM1R", 0x00B2),
    ("TBL1R", 0x00B3),
    ("TBM2R", 0x00B4),
    ("TBL2R", 0x00B5),
    ("TBCMR", 0x00BE),
    ("TBCLR", 0x00BF),

    ("SADR", 0x00C0),
    ("SAAR", 0x00C1),
    ("SALR", 0x00C2),
    ("SASR", 0x00C3),
    ("SACR", 0x00C4),
    ("SAER", 0x00C5),

    ("SEDR", 0x00C8),
    ("SEAR", 0x00C9),
    ("SELR", 0x00CA),
    ("SESR", 0x00CB),
    ("SECR", 0x00CC),
    ("SEER", 0x00CD),

    ("SBDR", 0x00D0),
    ("SBAR", 0x00D1),
    ("SBLR", 0x00D2),
    ("SBSR", 0x00D3),
    ("SBCR", 0x00D4),
    ("SBER", 0x00D5),

    ("SFDR", 0x00D8),
    ("SFAR", 0x00D9),
    ("SFLR", 0x00DA),
    ("SFSR", 0x00DB),
    ("SFCR", 0x00DC),
    ("SFER", 0x00DD),

    ("SCDR", 0x00E0),
    ("SCAR", 0x00E1),
    ("SCLR", 0x00E2),
    ("SCSR", 0x00E3),
    ("SCCR", 0x00E4),
    ("SCER", 0x00E5),

    ("SDDR", 0x00F0),
    ("SDAR", 0x00F1),
    ("SDLR", 0x00F2),
    ("SDSR", 0x00F3),
    ("SDCR", 0x00F4),
    ("SDER", 0x00F5),

    ("RTUER", 0x0300),
    ("SPUER", 0x0320),
    ("PAUER", 0x0330),
    ("PBUER", 0x0340),
    ("PCUER", 0x0350),
    ("PDUER", 0x0360),
    ("PEUER", 0x0370),
    ("ICUER", 0x0358),
    ("IBUER", 0x0380),
    ("PWUER", 0x0388),
    ("QDUER", 0x0390),
    ("IUER", 0x0398),
    ("TAUER", 0x03A0),
    ("TBUER", 0x03B0),
    ("SAUER", 0x03C0),
    ("SBUER", 0x03D0),
    ("SCUER", 0x03E0),
    ("SDUER", 0x03F0),
    ("SEUER", 0x03C8),
    ("SFUER", 0x03D8),

    ("EDMR", 0x0420),
    ("WPCR", 0x0440),

    ("STKCR", 0x0444),
    ("STKLLR", 0x0445),
    ("STKHLR", 0x0446),

    ("RAMSR", 0x0448),

    ("WPLR", 0x0460),
    ("WPHR", 0x0461),

    ("WPSAR", 0x0480),
    ("WPSALR", 0x0481),
    ("WPSAHR", 0x0482),
    ("WPSBR", 0x0484),
    ("WPSBLR", 0x0485),
    ("WPSBHR", 0x0486),

    ("STKSEGL", 0x001A),
    ("STKSEGH", 0x001B),
    ("MACR", 0x001D),
    ("DATSEGL", 0x001E),
    ("DATSEGH", 0x001F),
    ("IHCR", 0x0028),
    ("IHSR", 0x0029),
    ("IHTR", 0x002A),

    ("TBSL1R", 0x00BA),
    ("TBSM1R", 0x00BB),
    ("TBSL2R", 0x00BC),
    ("TBSM2R", 0x00BD),

    ("PWBAR", 0x00E8),
    ("PWBPR", 0x00E9),

    ("ACS0CR", 0x0410),
    ("ACS1CR", 0x0411),

    ("VRAM00", 0x0600),
    ("VRAM01", 0x0601),
    ("VRAM02", 0x0602),
    ("VRAM03", 0x0603),
    ("VRAM04", 0x0604),
    ("VRAM05", 0x0605),
    ("VRAM06", 0x0606),
    ("VRAM07", 0x0607),
    ("VRAM08", 0x0608),
    ("VRAM09", 0x0609),
    ("VRAM0A", 0x060A),
    ("VRAM0B", 0x060B),
    ("VRAM0C", 0x060C),
    ("VRAM0D", 0x060D),
    ("VRAM0E", 0x060E),
    ("VRAM0F", 0x060F),
    ("VRAM10", 0x0610),
    ("VRAM11", 0x0611),
    ("VRAM12", 0x0612),
    ("VRAM13", 0x0613),
    ("VRAM14", 0x0614),
    ("VRAM15", 0x0615),
    ("VRAM16", 0x0616),
    ("VRAM17", 0x0617),
    ("VRAM18", 0x0618),
    ("VRAM19", 0x0619),
    ("VRAM1A", 0x061A),
    ("VRAM1B", 0x061B),
    ("VRAM1C", 0x061C),
    ("VRAM1D", 0x061D),
    ("VRAM1E", 0x061E),
    ("VRAM1F", 0x061F),

    ("B0M0R", 0x0308),
    ("B0M1R", 0x0309),
    ("B0M2R", 0x030A),
    ("B0CR", 0x030B),
    ("B0A0R", 0x030C),
    ("B0A1R", 0x030D),
    ("B0A2R", 0x030E),
    ("B1M0R", 0x0318),
    ("B1M1R", 0x0319),
    ("B1M2R", 0x031A),
    ("B1CR", 0x031B),
    ("B1A0R", 0x031C),
    ("B1A1R", 0x031D),
    ("B1A2R", 0x031E),
    ("B2M0R", 0x0328),
    ("B2M1R", 0x0329),
    ("B2M2R", 0x032A),
    ("B2CR", 0x032B),
    ("B2A0R", 0x032C),
    ("B2A1R", 0x032D),
    ("B2A2R", 0x032E),
    ("B3M0R", 0x0338),
    ("B3M1R", 0x0339),
    ("B3M2R", 0x033A),
    ("B3CR", 0x033B),
    ("B3A0R", 0x033C),
    ("B3A1R", 0x033D),
    ("B3A2R", 0x033E),
    ("B4M0R", 0x0348),
    ("B4M1R", 0x0349),
    ("B4M2R", 0x034A),
    ("B4CR", 0x034B),
    ("B4A0R", 0x034C),
    ("B4A1R", 0x034D),
    ("B4A2R", 0x034E),
    ("B5M0R", 0x0368),
    ("B5M1R", 0x0369),
    ("B5M2R", 0x036A),
    ("B5CR", 0x036B),
    ("B5A0R", 0x036C),
    ("B5A1R", 0x036D),
    ("B5A2R", 0x036E),
    ("B6M0R", 0x0378),
    ("B6M1R", 0x0379),
    ("B6M2R", 0x037A),
    ("B6CR", 0x037B),
    ("B6A0R", 0x037C),
    ("B6A1R", 0x037D),
    ("B6A2R", 0x037E),

    ("WP0R", 0x0460),
    ("WP1R", 0x0461),
    ("WP2R", 0x0462),
    ("WP3R", 0x0463),
    ("WP4R", 0x0464),
    ("WP5R", 0x0465),
    ("WP6R", 0x0466),
    ("WP7R", 0x0467),
    ("WP8R", 0x0468),
    ("WP9R", 0x0469),
    ("WP10R", 0x046A),
    ("WP11R", 0x046B),
    ("WP12R", 0x046C),
    ("WP13R", 0x046D),
    ("WP14R", 0x046E),
    ("WP15R", 0x046F),
    ("WP16R", 0x0470),
    ("WP17R", 0x0471),
    ("WP18R", 0x0472),
    ("WP19R", 0x0473),
    ("WP20R", 0x0474),
    ("WP21R", 0x0475),
    ("WP22R", 0x0476),
    ("WP23R", 0x0477),
    ("WP24R", 0x0478),
    ("WP25R", 0x0479),
    ("WP26R", 0x047A),
    ("WP27R", 0x047B),
    ("WP28R", 0x047C),
    ("WP29R", 0x047D),
    ("WP30R", 0x047E),
    ("WP31R", 0x047F),

    ("TCUER", 0x03F8),

    ("PCDDR", 0x0051),
    ("PCDCR", 0x0054),
    ("PCALR", 0x0052),
    ("PCAHR", 0x0053),
    ("PDALR", 0x0062),
    ("PDAHR", 0x0063),
    ("PEALR", 0x0072),
    ("PEAHR", 0x0073),
    ("PEDCR", 0x0076),

    ("TCCSR", 0x0500),
    ("TCCR", 0x0501),
    ("TCDLR", 0x0502),
    ("TCDHR", 0x0503),
    ("TCS0LR", 0x0508),
    ("TCS0HR", 0x0509),
    ("TCR0LR", 0x050A),
    ("TCR0HR", 0x050B),
    ("TCS1LR", 0x050C),
    ("TCS1HR", 0x050D),
    ("TCR1LR", 0x050E),
    ("TCR1HR", 0x050F),
    ("TCS2LR", 0x0518),
    ("TCS2HR", 0x0519),
    ("TCR2LR", 0x051A),
    ("TCR2HR", 0x051B),
    ("TCS3LR", 0x051C),
    ("TCS3HR", 0x051D),
    ("TCR3LR", 0x051E),
    ("TCR3HR", 0x051F),

    ("TCBAR", 0x00F8),
    ("TCBPR", 0x00F9),

    ("SADLR", 0x00C6),
    ("SADHR", 0x00C7),
    ("SBDLR", 0x00D6),
    ("SBDHR", 0x00D7),
    ("SCDLR", 0x00E6),
    ("SCDHR", 0x00E7),
    ("SDDLR", 0x00F6),
    ("SDDHR", 0x00F7),
    ("SEDLR", 0x00CE),
    ("SEDHR", 0x00CF),
    ("SFDLR", 0x00DE),
    ("SFDHR", 0x00DF),

    ("DMCSR", 0x0100),
    ("DMALR", 0x0101),
    ("DMHR", 0x0102),
    ("DMCR", 0x0104),
    ("DMTCR", 0x0105),
    ("DMR0CR", 0x0106),
    ("DMR1CR", 0x0107),
    ("DTRCR", 0x0115),
    ("DTRDLR", 0x0116),
    ("DTRDHR", 0x0117),

    ("D0BCR", 0x0103),
    ("D0TBR", 0x0108),
    ("D0TMR", 0x0109),
    ("D0BU0R", 0x010A),
    ("D0BU1R", 0x010B),
    ("D0IA0R", 0x010C),
    ("D0IA1R", 0x010D),
    ("D0IA2R", 0x010E),
    ("D0SMR", 0x0180),
    ("D0CR", 0x0181),
    ("D0L0R", 0x0182),
    ("D0L1R", 0x0183),
    ("D0SA0R", 0x0184),
    ("D0SA1R", 0x0185),
    ("D0SA2R", 0x0186),
    ("D0DA0R", 0x0188),
    ("D0DA1R", 0x0189),
    ("D0DA2R", 0x018A),
    ("D0LA0R", 0x018C),
    ("D0LA1R", 0x018D),
    ("D0LA2R", 0x018E),

    ("D1BCR", 0x0113),
    ("D1TBR", 0x0118),
    ("D1TMR", 0x0119),
    ("D1BU0R", 0x011A),
    ("D1BU1R", 0x011B),
    ("D1IA0R", 0x011C),
    ("D1IA1R", 0x011D),
    ("D1IA2R", 0x011E),
    ("D1SMR", 0x0190),
    ("D1CR", 0x0191),
    ("D1L0R", 0x0192),
    ("D1L1R", 0x0193),
    ("D1SA0R", 0x0194),
    ("D1SA1R", 0x0195),
    ("D1SA2R", 0x0196),
    ("D1DA0R", 0x0198),
    ("D1DA1R", 0x0199),
    ("D1DA2R", 0x019A),
    ("D1LA0R", 0x019C),
    ("D1LA1R", 0x019D),
    ("D1LA2R", 0x019E),

    ("D2BCR", 0x0123),
    ("D2TBR", 0x0128),
    ("D2TMR", 0x0129),
    ("D2BU0R", 0x012A),
    ("D2BU1R", 0x012B),
    ("D2IA0R", 0x012C),
    ("D2IA1R", 0x012D),
    ("D2IA2R", 0x012E),
    ("D2SMR", 0x01A0),
    ("D2CR", 0x01A1),
    ("D2L0R", 0x01A2),
    ("D2L1R", 0x01A3),
    ("D2SA0R", 0x01A4),
    ("D2SA1R", 0x01A5),
    ("D2SA2R", 0x01A6),
    ("D2DA0R", 0x01A8),
    ("D2DA1R", 0x01A9),
    ("D2DA2R", 0x01AA),
    ("D2LA0R", 0x01AC),
    ("D2LA1R", 0x01AD),
    ("D2LA2R", 0x01AE),

    ("D3BCR", 0x0133),
    ("D3TBR", 0x0138),
    ("D3TMR", 0x0139),
    ("D3BU0R", 0x013A),
    ("D3BU1R", 0x013B),
    ("D3IA0R", 0x013C),
    ("D3IA1R", 0x013D),
    ("D3IA2R", 0x013E),
    ("D3SMR", 0x01B0),
    ("D3CR", 0x01B1),
    ("D3L0R", 0x01B2),
    ("D3L1R", 0x01B3),
    ("D3SA0R", 0x01B4),
    ("D3SA1R", 0x01B5),
    ("D3SA2R", 0x01B6),
    ("D3DA0R", 0x01B8),
    ("D3DA1R", 0x01B9),
    ("D3DA2R", 0x01BA),
    ("D3LA0R", 0x01BC),
    ("D3LA1R", 0x01BD),
    ("D3LA2R", 0x01BE),

    ("D4BCR", 0x0143),
    ("D4TBR", 0x0148),
    ("D4TMR", 0x0149),
    ("D4BU0R", 0x014A),
    ("D4BU1R", 0x014B),
    ("D4IA0R", 0x014C),
    ("D4IA1R", 0x014D),
    ("D4IA2R", 0x014E),
    ("D4SMR", 0x01C0),
    ("D4CR", 0x01C1),
    ("D4L0R", 0x01C2),
    ("D4L1R", 0x01C3),
    ("D4SA0R", 0x01C4),
    ("D4SA1R", 0x01C5),
    ("D4SA2R", 0x01C6),
    ("D4DA0R", 0x01C8),
    ("D4DA1R", 0x01C9),
    ("D4DA2R", 0x01CA),
    ("D4LA0R", 0x01CC),
    ("D4LA1R", 0x01CD),
    ("D4LA2R", 0x01CE),

    ("D5BCR", 0x0153),
    ("D5TBR", 0x0158),
    ("D5TMR", 0x0159),
    ("D5BU0R", 0x015A),
    ("D5BU1R", 0x015B),
    ("D5IA0R", 0x015C),
    ("D5IA1R", 0x015D),
    ("D5IA2R", 0x015E),
    ("D5SMR", 0x01D0),
    ("D5CR", 0x01D1),
    ("D5L0R", 0x01D2),
    ("D5L1R", 0x01D3),
    ("D5SA0R", 0x01D4),
    ("D5SA1R", 0x01D5),
    ("D5SA2R", 0x01D6),
    ("D5DA0R", 0x01D8),
    ("D5DA1R", 0x01D9),
    ("D5DA2R", 0x01DA),
    ("D5LA0R", 0x01DC),
    ("D5LA1R", 0x01DD),
    ("D5LA2R", 0x01DE),

    ("D6BCR", 0x0163),
    ("D6TBR", 0x0168),
    ("D6TMR", 0x0169),
    ("D6BU0R", 0x016A),
    ("D6BU1R", 0x016B),
    ("D6IA0R", 0x016C),
    ("D6IA1R", 0x016D),
    ("D6IA2R", 0x016E),
    ("D6SMR", 0x01E0),
    ("D6CR", 0x01E1),
    ("D6L0R", 0x01E2),
    ("D6L1R", 0x01E3),
    ("D6SA0R", 0x01E4),
    ("D6SA1R", 0x01E5),
    ("D6SA2R", 0x01E6),
    ("D6DA0R", 0x01E8),
    ("D6DA1R", 0x01E9),
    ("D6DA2R", 0x01EA),
    ("D6LA0R", 0x01EC),
    ("D6LA1R", 0x01ED),
    ("D6LA2R", 0x01EE),

    ("D7BCR", 0x0173),
    ("D7TBR", 0x0178),
    ("D7TMR", 0x0179),
    ("D7BU0R", 0x017A),
    ("D7BU1R", 0x017B),
    ("D7IA0R", 0x017C),
    ("D7IA1R", 0x017D),
    ("D7IA2R", 0x017E),
    ("D7SMR", 0x01F0),
    ("D7CR", 0x01F1),
    ("D7L0R", 0x01F2),
    ("D7L1R", 0x01F3),
    ("D7SA0R", 0x01F4),
    ("D7SA1R", 0x01F5),
    ("D7SA2R", 0x01F6),
    ("D7DA0R", 0x01F8),
    ("D7DA1R", 0x01F9),
    ("D7DA2R", 0x01FA),
    ("D7LA0R", 0x01FC),
    ("D7LA1R", 0x01FD),
    ("D7LA2R", 0x01FE),

    ("NADR", 0x0200),
    ("NALDR", 0x0201),
    ("NATSR", 0x0202),
    ("NARSR", 0x0203),
    ("NACSR", 0x0204),
    ("NASR", 0x0205),
    ("NARR", 0x0206),
    ("NACR", 0x0207),
    ("NAPCR", 0x0208),
    ("NATCR", 0x020A),
    ("NARCR", 0x020B),

    ("NAPA0R", 0x0210),
    ("NAPA1R", 0x0211),
    ("NAPA2R", 0x0212),
    ("NAPA3R", 0x0213),
    ("NAPA4R", 0x0214),
    ("NAPA5R", 0x0215),

    ("NAMF0R", 0x0218),
    ("NAMF1R", 0x0219),
    ("NAMF2R", 0x021A),
    ("NAMF3R", 0x021B),
    ("NAMF4R", 0x021C),
    ("NAMF5R", 0x021D),
    ("NAMF6R", 0x021E),
    ("NAMF7R", 0x021F),

    ("NAMHR", 0x0220),
    ("NACDR", 0x0221),
    ("NAAER", 0x0222),
    ("NACER", 0x0223),
    ("NAC0R", 0x0224),
    ("NAC1R", 0x0225),
    ("NAMFR", 0x0226),

    ("SWDTR", 0x000C),
];
